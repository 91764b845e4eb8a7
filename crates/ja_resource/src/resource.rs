use alloc::vec::Vec;

use crate::info::{FieldTable, TypeDescriptor};
use crate::{ResourceHooks, Result};

// -----------------------------------------------------------------------------
// Resource

/// A record type with a JSON:API shape.
///
/// Usually derived with [`derive::Resource`](crate::derive::Resource); see
/// [`FieldTable`] for a hand-written implementation.
pub trait Resource: ResourceHooks + Sized + Send + Sync + 'static {
    /// The type's identifier, used for the default resource type name.
    fn type_ident() -> &'static str;

    /// The fields of the type with their tags.
    fn field_table() -> FieldTable<Self>;

    /// The cached descriptor of the type, built on first use.
    #[inline]
    fn descriptor() -> &'static TypeDescriptor<Self> {
        crate::cache::descriptor::<Self>()
    }
}

// -----------------------------------------------------------------------------
// DynResource

/// Object-safe encoding of one resource, for documents that mix types.
///
/// Implemented for every [`Resource`]; [`Response`](crate::document::Response)
/// holds its payload through this trait.
pub trait DynResource {
    /// The resource type name of the value.
    fn resource_type(&self) -> &str;

    /// Appends the encoded resource to `out`.
    fn encode_into(&mut self, scope: &str, out: &mut Vec<u8>) -> Result<()>;
}

impl<R: Resource> DynResource for R {
    #[inline]
    fn resource_type(&self) -> &str {
        R::descriptor().resource_type()
    }

    #[inline]
    fn encode_into(&mut self, scope: &str, out: &mut Vec<u8>) -> Result<()> {
        crate::ser::write_record(self, scope, out)
    }
}
