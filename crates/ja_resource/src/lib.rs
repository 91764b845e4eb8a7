//! Tag-driven JSON:API encoding and decoding.
//!
//! A record type describes its wire shape with `#[jsonapi(...)]` field tags
//! through [`derive::Resource`]. The first encode or decode of a type builds a
//! [`TypeDescriptor`](info::TypeDescriptor) and caches it for the rest of the
//! process.
//!
//! ```
//! use ja_resource::derive::Resource;
//!
//! #[derive(Resource, Default)]
//! struct Article {
//!     #[jsonapi(id = "articles")]
//!     id: u64,
//!     #[jsonapi(attr)]
//!     title: String,
//! }
//!
//! let mut article = Article { id: 1, title: "Hello".into() };
//! let bytes = ja_resource::encode(&mut article).unwrap();
//! assert_eq!(
//!     bytes,
//!     br#"{"id":"1","type":"articles","attributes":{"title":"Hello"}}"#,
//! );
//!
//! let input = br#"{"data":{"id":"1","type":"articles","attributes":{"title":"Bye"}}}"#;
//! let changes = ja_resource::decode_with_changes(input, &mut article).unwrap();
//! assert_eq!(article.title, "Bye");
//! assert_eq!(changes.to_string(), "title: Hello -> Bye");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `ja_resource`, including in its own tests.
extern crate self as ja_resource;

// -----------------------------------------------------------------------------
// no_std support

// The descriptor and pattern caches need `std::sync`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod error;
mod hooks;
mod resource;
mod value;

pub mod de;
pub mod diff;
pub mod document;
pub mod info;
pub mod ser;
pub mod validate;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use ja_resource_derive as derive;

pub use error::{Error, Result};
pub use hooks::{HookError, ResourceHooks};
pub use resource::{DynResource, Resource};
pub use value::FieldValue;

pub use de::{Decoder, decode, decode_with_changes, decode_with_changes_and_scope, decode_with_scope};
pub use diff::{Change, Changes};
pub use ser::{Encoder, encode, encode_many, encode_many_with_scope, encode_with_scope};
