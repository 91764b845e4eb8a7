//! Parsed form of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod resource_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, FieldKind, Role, TypeAttributes};
pub(crate) use resource_struct::{ResourceStruct, StructField};
