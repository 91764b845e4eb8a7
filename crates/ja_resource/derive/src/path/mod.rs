//! Paths of the `ja_resource` items used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path of the `ja_resource` crate from the caller.
///
/// 1. For crates that depend on `ja_resource`, `::ja_resource` is returned.
/// 2. For crates that depend on `ja_core`, `::ja_core::resource` is returned.
/// 3. For crates that depend on `ja`, `::ja::resource` is returned.
/// 4. Otherwise `::ja_resource`.
///
/// This reads the caller's manifest, so it is resolved once per derive and
/// passed down.
pub(crate) fn ja_resource() -> syn::Path {
    ja_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ja_resource"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn resource_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::Resource
    }
}

#[inline(always)]
pub(crate) fn resource_hooks_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::ResourceHooks
    }
}

#[inline(always)]
pub(crate) fn field_value_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::FieldValue
    }
}

#[inline(always)]
pub(crate) fn field_table_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::info::FieldTable
    }
}

#[inline(always)]
pub(crate) fn field_tag_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::info::FieldTag
    }
}

#[inline(always)]
pub(crate) fn field_role_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::info::FieldRole
    }
}

#[inline(always)]
pub(crate) fn field_accessor_(ja_resource_path: &syn::Path) -> TokenStream {
    quote! {
        #ja_resource_path::info::FieldAccessor
    }
}
