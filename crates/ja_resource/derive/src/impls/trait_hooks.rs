use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ResourceStruct;

/// Empty `ResourceHooks` impl, unless the type asked for `#[jsonapi(hooks)]`.
pub(crate) fn impl_trait_hooks(data: &ResourceStruct) -> TokenStream {
    if data.attrs.custom_hooks {
        return crate::utils::empty();
    }

    let resource_hooks_ = crate::path::resource_hooks_(data.ja_resource_path());
    let ident = data.ident;
    let (impl_generics, ty_generics, where_clause) = data.generics.split_for_impl();

    quote! {
        impl #impl_generics #resource_hooks_ for #ident #ty_generics #where_clause {}
    }
}
