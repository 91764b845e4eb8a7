use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::info::{FieldAccessor, FieldRole, kebab_case, valid_key};
use crate::{FieldValue, Resource};

// -----------------------------------------------------------------------------
// FieldDescriptor

/// How one field maps onto the wire.
pub struct FieldDescriptor<R> {
    path: String,
    name: &'static str,
    wire_name: &'static str,
    role: Option<FieldRole>,
    scopes: Vec<&'static str>,
    read_only: bool,
    quoted: bool,
    skip_if_empty: bool,
    accessor: FieldAccessor<R>,
}

impl<R: 'static> FieldDescriptor<R> {
    /// Dotted access path, including embedding fields.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key used in the document.
    #[inline]
    pub fn wire_name(&self) -> &'static str {
        self.wire_name
    }

    /// `None` for untagged fields.
    #[inline]
    pub fn role(&self) -> Option<FieldRole> {
        self.role
    }

    #[inline]
    pub fn scopes(&self) -> &[&'static str] {
        &self.scopes
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    #[inline]
    pub fn skips_if_empty(&self) -> bool {
        self.skip_if_empty
    }

    /// Whether the field is visible to callers in `scope`.
    ///
    /// Unscoped fields are always visible, and an empty `scope` sees every
    /// field.
    pub fn in_scope(&self, scope: &str) -> bool {
        self.scopes.is_empty() || scope.is_empty() || self.scopes.iter().any(|s| *s == scope)
    }

    #[inline]
    pub fn accessor(&self) -> &FieldAccessor<R> {
        &self.accessor
    }

    #[inline]
    pub fn value<'a>(&self, record: &'a R) -> &'a dyn FieldValue {
        self.accessor.get(record)
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("path", &self.path)
            .field("wire_name", &self.wire_name)
            .field("role", &self.role)
            .field("scopes", &self.scopes)
            .field("read_only", &self.read_only)
            .field("quoted", &self.quoted)
            .field("skip_if_empty", &self.skip_if_empty)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// The wire shape of a record type.
///
/// Built once per type by [`Resource::descriptor`] and immutable afterwards.
///
/// # Examples
///
/// ```
/// use ja_resource::{Resource, derive::Resource};
///
/// #[derive(Resource, Default)]
/// struct UserProfile {
///     #[jsonapi(id)]
///     id: u64,
///     #[jsonapi(attr = "display-name")]
///     display_name: String,
///     #[jsonapi(attr, readonly)]
///     created: String,
///     secret: String,
/// }
///
/// let info = UserProfile::descriptor();
/// assert_eq!(info.resource_type(), "user-profile");
/// assert_eq!(info.identity().unwrap().name(), "id");
///
/// let attrs: Vec<_> = info.attributes().map(|f| f.wire_name()).collect();
/// assert_eq!(attrs, ["display-name", "created"]);
/// assert_eq!(info.fields().len(), 4);
/// ```
pub struct TypeDescriptor<R> {
    type_ident: &'static str,
    resource_type: String,
    identity: Option<usize>,
    attributes: Vec<usize>,
    links: Vec<usize>,
    relations: Vec<usize>,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R: Resource> TypeDescriptor<R> {
    /// Classifies the fields of `R::field_table()`.
    pub fn build() -> Self {
        let type_ident = R::type_ident();
        let table = R::field_table();

        let mut fields = Vec::with_capacity(table.len());
        let mut identity = None;
        let mut tagged_type_name = None;
        let mut attributes = Vec::new();
        let mut links = Vec::new();
        let mut relations = Vec::new();

        for entry in table {
            let index = fields.len();
            let role = entry.tag.as_ref().map(|tag| tag.role());

            let rename = entry
                .tag
                .as_ref()
                .filter(|tag| tag.role() != FieldRole::Id)
                .and_then(|tag| tag.name());

            let wire_name = match rename {
                Some(name) if valid_key(name) => name,
                Some(name) => {
                    log::warn!(
                        "{type_ident}.{}: invalid wire name {name:?}, using the declared name",
                        entry.path
                    );
                    entry.name
                }
                None => entry.name,
            };

            match role {
                Some(FieldRole::Id) if identity.is_none() => {
                    identity = Some(index);
                    tagged_type_name = entry.tag.as_ref().and_then(|tag| tag.name());
                }
                Some(FieldRole::Attr) => attributes.push(index),
                Some(FieldRole::Link) => links.push(index),
                Some(FieldRole::Rel) => relations.push(index),
                _ => {}
            }

            let (scopes, read_only, quoted, skip_if_empty) = match (&entry.tag, role) {
                (Some(tag), Some(FieldRole::Attr)) => (
                    tag.scopes().to_vec(),
                    tag.is_read_only(),
                    tag.is_quoted(),
                    tag.skips_if_empty(),
                ),
                _ => (Vec::new(), false, false, false),
            };

            fields.push(FieldDescriptor {
                path: entry.path,
                name: entry.name,
                wire_name,
                role,
                scopes,
                read_only,
                quoted,
                skip_if_empty,
                accessor: entry.accessor,
            });
        }

        if identity.is_none() {
            let any_tagged = fields.iter().any(|f| f.role.is_some());
            identity = R::identifier_field()
                .or(any_tagged.then_some("id"))
                .and_then(|wanted| fields.iter().position(|f| f.name == wanted));
        }

        let resource_type = tagged_type_name
            .filter(|name| !name.is_empty())
            .or_else(R::resource_type_name)
            .map(String::from)
            .unwrap_or_else(|| kebab_case(type_ident));

        Self {
            type_ident,
            resource_type,
            identity,
            attributes,
            links,
            relations,
            fields,
        }
    }
}

impl<R: 'static> TypeDescriptor<R> {
    /// The Rust identifier of the type.
    #[inline]
    pub fn type_ident(&self) -> &'static str {
        self.type_ident
    }

    /// The `type` member of encoded resources.
    #[inline]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// `false` for types without an identifier, which encode as plain JSON
    /// and can't be decoded.
    #[inline]
    pub fn is_api_shaped(&self) -> bool {
        self.identity.is_some()
    }

    #[inline]
    pub fn identity(&self) -> Option<&FieldDescriptor<R>> {
        self.identity.map(|index| &self.fields[index])
    }

    /// Attribute fields in declaration order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor<R>> + '_ {
        self.attributes.iter().map(|&index| &self.fields[index])
    }

    pub fn links(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor<R>> + '_ {
        self.links.iter().map(|&index| &self.fields[index])
    }

    pub fn relations(&self) -> impl ExactSizeIterator<Item = &FieldDescriptor<R>> + '_ {
        self.relations.iter().map(|&index| &self.fields[index])
    }

    /// Every field, tagged or not.
    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    /// Looks a field up by wire name among attributes.
    pub fn attribute(&self, wire_name: &str) -> Option<&FieldDescriptor<R>> {
        self.attributes().find(|f| f.wire_name == wire_name)
    }
}

impl<R> fmt::Debug for TypeDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_ident", &self.type_ident)
            .field("resource_type", &self.resource_type)
            .field("identity", &self.identity)
            .field("fields", &self.fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::derive::Resource;
    use crate::{Resource as _, ResourceHooks, decode, encode};
    use alloc::string::String;

    #[derive(Resource, Default)]
    #[jsonapi(hooks)]
    struct Widget {
        key: String,
        #[jsonapi(attr)]
        name: String,
    }

    impl ResourceHooks for Widget {
        fn resource_type_name() -> Option<&'static str> {
            Some("gadgets")
        }

        fn identifier_field() -> Option<&'static str> {
            Some("key")
        }
    }

    #[test]
    fn hooks_name_type_and_identity() {
        let info = Widget::descriptor();
        assert_eq!(info.resource_type(), "gadgets");
        assert_eq!(info.identity().map(|f| f.name()), Some("key"));
        assert!(info.is_api_shaped());

        let mut widget = Widget {
            key: String::from("k1"),
            name: String::from("dial"),
        };
        assert_eq!(
            encode(&mut widget).unwrap(),
            br#"{"id":"k1","type":"gadgets","attributes":{"name":"dial"}}"#
        );

        decode(br#"{"data":{"id":"k1","type":"gadgets","attributes":{"name":"knob"}}}"#, &mut widget).unwrap();
        assert_eq!(widget.name, "knob");
    }
}
