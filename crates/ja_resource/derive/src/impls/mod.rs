//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod trait_hooks;
mod trait_resource;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ResourceStruct;

pub(crate) use trait_hooks::impl_trait_hooks;
pub(crate) use trait_resource::impl_trait_resource;

/// All impls of `#[derive(Resource)]`.
pub(crate) fn impl_resource(data: &ResourceStruct) -> TokenStream {
    let resource_impl = impl_trait_resource(data);
    let hooks_impl = impl_trait_hooks(data);

    quote! {
        #resource_impl
        #hooks_impl
    }
}
