use proc_macro2::TokenStream;
use syn::ext::IdentExt;

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// The identifier without its `r#` prefix.
#[inline]
pub(crate) fn ident_name(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}
