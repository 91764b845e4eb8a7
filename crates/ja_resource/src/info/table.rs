use alloc::string::String;
use alloc::vec::Vec;
use alloc::format;
use core::fmt;

use crate::Resource;
use crate::info::{FieldAccessor, FieldTag};

// -----------------------------------------------------------------------------
// FieldEntry

/// One field of a [`FieldTable`].
pub struct FieldEntry<R> {
    /// Declared field name.
    pub name: &'static str,
    /// Dotted path from the outermost type, through embedded fields.
    pub path: String,
    /// `None` for untagged fields.
    pub tag: Option<FieldTag>,
    pub accessor: FieldAccessor<R>,
}

// -----------------------------------------------------------------------------
// FieldTable

/// Every visible field of a record type, in declaration order, with the
/// fields of embedded types spliced in at the embedding position.
///
/// # Examples
///
/// A hand-written equivalent of `#[derive(Resource)]`:
///
/// ```
/// use ja_resource::{Resource, ResourceHooks};
/// use ja_resource::info::{FieldAccessor, FieldTable, FieldTag};
///
/// #[derive(Default)]
/// struct Note {
///     key: String,
///     body: String,
/// }
///
/// impl ResourceHooks for Note {}
///
/// impl Resource for Note {
///     fn type_ident() -> &'static str {
///         "Note"
///     }
///
///     fn field_table() -> FieldTable<Self> {
///         FieldTable::<Self>::with_capacity(2)
///             .with_field("key", FieldTag::parse("id"), FieldAccessor::new::<String>(|n: &Note| &n.key, |n: &mut Note| &mut n.key))
///             .with_field("body", FieldTag::parse("attr"), FieldAccessor::new::<String>(|n: &Note| &n.body, |n: &mut Note| &mut n.body))
///     }
/// }
///
/// let mut note = Note { key: "a1".into(), body: "hi".into() };
/// let bytes = ja_resource::encode(&mut note).unwrap();
/// assert_eq!(bytes, br#"{"id":"a1","type":"note","attributes":{"body":"hi"}}"#);
/// ```
pub struct FieldTable<R> {
    entries: Vec<FieldEntry<R>>,
}

impl<R: 'static> FieldTable<R> {
    #[inline]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends a field.
    pub fn with_field(mut self, name: &'static str, tag: Option<FieldTag>, accessor: FieldAccessor<R>) -> Self {
        self.entries.push(FieldEntry {
            name,
            path: String::from(name),
            tag,
            accessor,
        });
        self
    }

    /// Appends the fields of the embedded type `E`, stored in field `name`.
    pub fn with_embedded<E: Resource>(mut self, name: &'static str, get: fn(&R) -> &E, get_mut: fn(&mut R) -> &mut E) -> Self {
        let inner = E::field_table();
        self.entries.reserve(inner.len());
        self.entries.extend(inner.entries.into_iter().map(|entry| FieldEntry {
            name: entry.name,
            path: format!("{name}.{}", entry.path),
            tag: entry.tag,
            accessor: entry.accessor.nest(get, get_mut),
        }));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FieldEntry<R>> {
        self.entries.iter()
    }
}

impl<R: 'static> Default for FieldTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> IntoIterator for FieldTable<R> {
    type Item = FieldEntry<R>;
    type IntoIter = alloc::vec::IntoIter<FieldEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<R> fmt::Debug for FieldEntry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("path", &self.path)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl<R> fmt::Debug for FieldTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}
