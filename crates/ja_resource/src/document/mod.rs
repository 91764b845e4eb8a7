//! The outer JSON:API document: response envelope, links and errors.

// -----------------------------------------------------------------------------
// Modules

mod error_item;
mod error_set;
mod links;
mod response;

// -----------------------------------------------------------------------------
// Exports

pub use error_item::{ErrorItem, ErrorSource};
pub use error_set::ErrorSet;
pub use links::{Links, Relation};
pub use response::{MetaData, Payload, Response};
