//! Decoding JSON:API documents onto records.

// -----------------------------------------------------------------------------
// Modules

mod request;

// -----------------------------------------------------------------------------
// Exports

pub use request::{Request, RequestData};

use alloc::string::String;
use alloc::vec::Vec;

use serde_json::value::RawValue;

use crate::diff::{Changes, diff_fields};
use crate::info::FieldDescriptor;
use crate::{Error, Resource, Result};

// -----------------------------------------------------------------------------
// Decoder

/// Decoding options shared by many calls.
///
/// Values are decoded into a scratch `R::default()` first. Only when every
/// accepted attribute decoded successfully are they moved into the target,
/// so a failed call leaves the target untouched.
///
/// # Examples
///
/// ```
/// use ja_resource::{Decoder, derive::Resource};
///
/// #[derive(Resource, Default)]
/// struct Account {
///     #[jsonapi(id = "accounts")]
///     id: u64,
///     #[jsonapi(attr)]
///     email: String,
///     #[jsonapi(attr, scope = "admin")]
///     role: String,
/// }
///
/// let mut account = Account { id: 1, email: "a@x".into(), role: "user".into() };
/// let input = br#"{"data":{"id":"1","type":"accounts","attributes":{"email":"b@x","role":"admin"}}}"#;
///
/// let changes = Decoder::with_scope("self").track_changes(true).decode(input, &mut account).unwrap();
/// assert_eq!(account.email, "b@x");
/// assert_eq!(account.role, "user");
/// assert_eq!(changes.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder<'s> {
    scope: &'s str,
    track_changes: bool,
}

impl<'s> Decoder<'s> {
    /// A decoder that accepts every writable attribute.
    #[inline]
    pub const fn new() -> Self {
        Self {
            scope: "",
            track_changes: false,
        }
    }

    /// A decoder that ignores attributes scoped away from `scope`.
    #[inline]
    pub const fn with_scope(scope: &'s str) -> Self {
        Self {
            scope,
            track_changes: false,
        }
    }

    /// Whether [`Decoder::decode`] collects field changes.
    #[inline]
    pub const fn track_changes(mut self, enabled: bool) -> Self {
        self.track_changes = enabled;
        self
    }

    /// Decodes `input` onto `target`.
    ///
    /// The returned [`Changes`] is empty unless change tracking is enabled.
    pub fn decode<R: Resource + Default>(&self, input: &[u8], target: &mut R) -> Result<Changes> {
        if let Some(custom) = target.decode_override(input) {
            custom.map_err(Error::Hook)?;
            return Ok(Changes::new());
        }

        let info = R::descriptor();
        if !info.is_api_shaped() {
            return Err(Error::TypeIncompatible {
                type_ident: info.type_ident(),
            });
        }

        let request = Request::parse(input).map_err(Error::Decode)?;
        let data = request.data.ok_or(Error::InvalidInput)?;

        if data.kind != info.resource_type() {
            return Err(Error::TypeMismatch {
                expected: String::from(info.resource_type()),
                found: data.kind.into_owned(),
            });
        }
        log::trace!("decoding {} (scope {:?})", info.type_ident(), self.scope);

        let mut scratch = R::default();
        let mut accepted: Vec<&FieldDescriptor<R>> = Vec::with_capacity(data.attributes.len());
        let mut changes = Changes::new();

        for field in info.attributes() {
            if field.is_read_only() || !field.in_scope(self.scope) {
                continue;
            }
            let Some(raw) = data.attributes.get(field.wire_name()) else {
                continue;
            };

            assign(field, &mut scratch, raw)?;

            if self.track_changes {
                diff_fields(
                    field.wire_name(),
                    field.value(target),
                    field.value(&scratch),
                    &mut changes,
                )?;
            }
            accepted.push(field);
        }

        for field in accepted {
            field.accessor().swap(target, &mut scratch);
        }

        target.after_decode().map_err(Error::Hook)?;
        Ok(changes)
    }
}

// Quoted attributes accept both `"12"` and `12`. An inner text that is not
// itself a JSON string is tried as a plain string first, so `"null"` stays a
// string where the field can hold one.
fn assign<R: Resource>(field: &FieldDescriptor<R>, scratch: &mut R, raw: &RawValue) -> Result<()> {
    let slot = field.accessor().get_mut(scratch);
    let text = raw.get();

    if field.is_quoted()
        && text.starts_with('"')
        && let Ok(inner) = serde_json::from_str::<String>(text)
    {
        if !inner.starts_with('"') && slot.assign_json(text).is_ok() {
            return Ok(());
        }
        if slot.assign_json(&inner).is_ok() {
            return Ok(());
        }
    }

    slot.assign_json(text).map_err(|source| Error::DecodeAttribute {
        field: field.wire_name(),
        source,
    })
}

/// Decodes `input` onto `target`, accepting every writable attribute.
#[inline]
pub fn decode<R: Resource + Default>(input: &[u8], target: &mut R) -> Result<()> {
    Decoder::new().decode(input, target).map(drop)
}

/// Decodes `input` onto `target` for callers in `scope`.
#[inline]
pub fn decode_with_scope<R: Resource + Default>(input: &[u8], target: &mut R, scope: &str) -> Result<()> {
    Decoder::with_scope(scope).decode(input, target).map(drop)
}

/// Decodes `input` onto `target` and reports what changed.
#[inline]
pub fn decode_with_changes<R: Resource + Default>(input: &[u8], target: &mut R) -> Result<Changes> {
    Decoder::new().track_changes(true).decode(input, target)
}

/// Decodes `input` onto `target` for callers in `scope` and reports what
/// changed.
#[inline]
pub fn decode_with_changes_and_scope<R: Resource + Default>(
    input: &[u8],
    target: &mut R,
    scope: &str,
) -> Result<Changes> {
    Decoder::with_scope(scope).track_changes(true).decode(input, target)
}
