//! See [`Resource`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static JSONAPI_ATTRIBUTE_NAME: &str = "jsonapi";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Resource Derivation
///
/// `#[derive(Resource)]` implements `Resource` for a struct with named
/// fields, and an empty `ResourceHooks` unless the type opts out.
///
/// Every field ends up in the field table, tagged or not, so every field type
/// must be `Serialize + DeserializeOwned + Send + Sync + 'static`. Use
/// `#[jsonapi(skip)]` to leave a field out.
///
/// ## Field Tags
///
/// A field takes at most one role:
///
/// - `id` / `id = "articles"`: the resource identifier; the name is the
///   resource type (default: the kebab-cased struct name).
/// - `attr` / `attr = "name"`: an entry of `attributes`.
/// - `link` / `link = "self"`: an entry of `links`.
/// - `rel` / `rel = "author"`: an entry of `relationships`.
///
/// Attributes also accept these modifiers:
///
/// - `readonly`: never written by decode.
/// - `string`: the value is wrapped in a JSON string.
/// - `omitempty`: left out when the encoded value is empty.
/// - `scope = "2,3"`: only visible to callers in one of the listed scopes.
///
/// ```rust, ignore
/// #[derive(Resource, Default)]
/// struct User {
///     #[jsonapi(id = "users")]
///     id: u64,
///     #[jsonapi(attr, omitempty)]
///     name: String,
///     #[jsonapi(attr = "age", string, scope = "admin")]
///     age: u32,
///     #[jsonapi(link = "self")]
///     self_link: String,
///     #[jsonapi(skip)]
///     cache: NotSerializable,
/// }
/// ```
///
/// ## Embedding
///
/// `#[jsonapi(embed)]` splices the fields of another `Resource` in at the
/// position of the field, including its `id` tag.
///
/// ## Hooks
///
/// `#[jsonapi(hooks)]` on the type suppresses the empty `ResourceHooks`
/// impl, so the type can implement the hooks itself.
#[proc_macro_derive(Resource, attributes(jsonapi))]
pub fn derive_resource(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ResourceStruct::from_ast(&ast) {
        Ok(data) => impls::impl_resource(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
