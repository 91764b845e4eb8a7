//! Field tags and the per-type descriptors built from them.
//!
//! `#[derive(Resource)]` produces a [`FieldTable`]: one [`FieldTag`] and one
//! [`FieldAccessor`] per field. The table is turned into a [`TypeDescriptor`]
//! once per type and cached.

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod case;
mod descriptor;
mod table;
mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::FieldAccessor;
pub use case::{column_name, kebab_case, transform, valid_key};
pub use descriptor::{FieldDescriptor, TypeDescriptor};
pub use table::{FieldEntry, FieldTable};
pub use tag::{FieldRole, FieldTag};
