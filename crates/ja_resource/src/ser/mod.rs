//! Encoding records into JSON:API resource objects.

// -----------------------------------------------------------------------------
// Modules

mod empty;
mod writer;

// -----------------------------------------------------------------------------
// Exports

pub(crate) use writer::write_record;

use alloc::vec::Vec;

use crate::{Resource, Result};

// -----------------------------------------------------------------------------
// Encoder

/// Encoding options shared by many calls.
///
/// # Examples
///
/// ```
/// use ja_resource::{Encoder, derive::Resource};
///
/// #[derive(Resource, Default)]
/// struct Doc {
///     #[jsonapi(id = "docs")]
///     id: u32,
///     #[jsonapi(attr)]
///     title: String,
///     #[jsonapi(attr, scope = "admin")]
///     owner: String,
/// }
///
/// let mut docs = vec![
///     Doc { id: 1, title: "a".into(), owner: "x".into() },
///     Doc { id: 2, title: "b".into(), owner: "y".into() },
/// ];
///
/// let public = Encoder::with_scope("public").encode_many(&mut docs).unwrap();
/// assert_eq!(
///     public,
///     br#"[{"id":"1","type":"docs","attributes":{"title":"a"}},{"id":"2","type":"docs","attributes":{"title":"b"}}]"#,
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder<'s> {
    scope: &'s str,
}

impl<'s> Encoder<'s> {
    /// An encoder that shows every field.
    #[inline]
    pub const fn new() -> Self {
        Self { scope: "" }
    }

    /// An encoder that hides attributes scoped away from `scope`.
    #[inline]
    pub const fn with_scope(scope: &'s str) -> Self {
        Self { scope }
    }

    #[inline]
    pub fn scope(&self) -> &'s str {
        self.scope
    }

    /// Encodes one record.
    pub fn encode<R: Resource>(&self, record: &mut R) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(128);
        write_record(record, self.scope, &mut out)?;
        Ok(out)
    }

    /// Encodes records as a JSON array.
    pub fn encode_many<R: Resource>(&self, records: &mut [R]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(2 + records.len() * 128);
        out.push(b'[');
        for (index, record) in records.iter_mut().enumerate() {
            if index > 0 {
                out.push(b',');
            }
            write_record(record, self.scope, &mut out)?;
        }
        out.push(b']');
        Ok(out)
    }
}

/// Encodes `record` with every field visible.
#[inline]
pub fn encode<R: Resource>(record: &mut R) -> Result<Vec<u8>> {
    Encoder::new().encode(record)
}

/// Encodes `record` for callers in `scope`.
#[inline]
pub fn encode_with_scope<R: Resource>(record: &mut R, scope: &str) -> Result<Vec<u8>> {
    Encoder::with_scope(scope).encode(record)
}

/// Encodes `records` as an array with every field visible.
#[inline]
pub fn encode_many<R: Resource>(records: &mut [R]) -> Result<Vec<u8>> {
    Encoder::new().encode_many(records)
}

/// Encodes `records` as an array for callers in `scope`.
#[inline]
pub fn encode_many_with_scope<R: Resource>(records: &mut [R], scope: &str) -> Result<Vec<u8>> {
    Encoder::with_scope(scope).encode_many(records)
}
