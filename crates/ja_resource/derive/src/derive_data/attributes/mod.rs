//! `#[jsonapi(...)]` attributes on types and fields.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAttributes, FieldKind, Role};
pub(crate) use type_attributes::TypeAttributes;
