use alloc::string::String;

use thiserror::Error;

use crate::HookError;

/// Result alias for encode and decode operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

// -----------------------------------------------------------------------------
// Error

/// Failure of an encode or decode call.
///
/// These are internal operation failures. Client-facing problems are modelled
/// by [`ErrorItem`](crate::document::ErrorItem); a response layer usually maps
/// an `Error` to [`ErrorItem::internal`](crate::document::ErrorItem::internal).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The inbound document carries no primary `data` object.
    #[error("document has no primary data")]
    InvalidInput,

    /// The document's `type` differs from the target's resource type.
    #[error("can't decode item of type '{found}' into item of type '{expected}'")]
    TypeMismatch { expected: String, found: String },

    /// The target type has no identifier field.
    #[error("{type_ident} is incompatible with json api")]
    TypeIncompatible { type_ident: &'static str },

    /// A field value could not be serialized.
    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The inbound document is not valid JSON or not an object.
    #[error("decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// An attribute value does not fit the field it maps to.
    #[error("attribute '{field}' could not be decoded: {source}")]
    DecodeAttribute {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A lifecycle hook failed.
    #[error("{0}")]
    Hook(HookError),
}

impl Error {
    /// Returns `true` for [`Error::TypeMismatch`].
    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
