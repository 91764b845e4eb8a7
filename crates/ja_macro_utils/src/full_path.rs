//! Fully qualified paths of prelude items.
//!
//! Generated code must not depend on what the caller has in scope, so items
//! like `Some` are spelled out as `::core::option::Option::Some`.
//!
//! ```
//! use ja_macro_utils::full_path::SomeFP;
//! use quote::quote;
//!
//! let tokens = quote! { #SomeFP(1) };
//! assert!(tokens.to_string().starts_with(":: core :: option :: Option :: Some"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$attr:meta])* $name:ident => $($seg:ident)::+;)*) => {$(
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($(::$seg)+).to_tokens(tokens);
            }
        }
    )*};
}

define_full_path! {
    /// `::core::option::Option::Some`
    SomeFP => core::option::Option::Some;
    /// `::core::option::Option::None`
    NoneFP => core::option::Option::None;
}
