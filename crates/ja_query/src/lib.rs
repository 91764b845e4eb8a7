//! Request-side helpers around `ja_resource`: URL query parameters and
//! PostgreSQL `json_build_object` expressions.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod params;
mod query;
mod sql;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use params::Params;
pub use query::{Query, SortField};
pub use sql::ObjectBuilder;
