use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// FieldRole

/// What a tagged field contributes to a resource object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// The resource identifier, written as `"id"`.
    Id,
    /// An entry of `"attributes"`.
    Attr,
    /// An entry of `"links"`.
    Link,
    /// An entry of `"relationships"`.
    Rel,
}

impl FieldRole {
    /// Parses a role keyword: `id`, `attr`, `link` or `rel`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "id" => Some(Self::Id),
            "attr" => Some(Self::Attr),
            "link" => Some(Self::Link),
            "rel" => Some(Self::Rel),
            _ => None,
        }
    }

    /// The keyword used in tags.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Attr => "attr",
            Self::Link => "link",
            Self::Rel => "rel",
        }
    }
}

// -----------------------------------------------------------------------------
// FieldTag

/// The declarative tag of one field.
///
/// For [`FieldRole::Id`] the name is the resource type name; for the other
/// roles it overrides the wire name. Modifiers only affect attributes.
///
/// # Examples
///
/// Built by `#[derive(Resource)]` from `#[jsonapi(attr = "age", string, scope = "2,3")]`,
/// or parsed from the textual grammar for hand-written impls:
///
/// ```
/// use ja_resource::info::{FieldRole, FieldTag};
///
/// let built = FieldTag::new(FieldRole::Attr).named("age").quoted().scoped("2,3");
/// let parsed = FieldTag::parse("attr,age,string").unwrap().scoped("2,3");
///
/// assert_eq!(built, parsed);
/// assert_eq!(parsed.scopes(), ["2", "3"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldTag {
    role: FieldRole,
    name: Option<&'static str>,
    scopes: Vec<&'static str>,
    read_only: bool,
    quoted: bool,
    skip_if_empty: bool,
}

impl FieldTag {
    /// A tag with `role` and no name or modifiers.
    #[inline]
    pub const fn new(role: FieldRole) -> Self {
        Self {
            role,
            name: None,
            scopes: Vec::new(),
            read_only: false,
            quoted: false,
            skip_if_empty: false,
        }
    }

    /// Parses `role[,name[,modifier...]]`.
    ///
    /// Returns `None` for an unknown role. An empty name token means "no
    /// name"; unknown modifiers are ignored.
    pub fn parse(tag: &'static str) -> Option<Self> {
        let mut tokens = tag.split(',').map(str::trim);
        let mut this = Self::new(FieldRole::from_keyword(tokens.next()?)?);

        if let Some(name) = tokens.next().filter(|name| !name.is_empty()) {
            this = this.named(name);
        }
        if this.role == FieldRole::Attr {
            for modifier in tokens {
                this = match modifier {
                    "readonly" => this.read_only(),
                    "string" => this.quoted(),
                    "omitempty" => this.omit_empty(),
                    _ => this,
                };
            }
        }
        Some(this)
    }

    /// Sets the wire name, or the resource type name for an `id` tag.
    #[inline]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Marks the field as never written by decode.
    #[inline]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Wraps the encoded value in a JSON string.
    #[inline]
    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    /// Omits the field from output when its value is empty.
    #[inline]
    pub fn omit_empty(mut self) -> Self {
        self.skip_if_empty = true;
        self
    }

    /// Adds the comma-separated scope labels of `list`.
    pub fn scoped(mut self, list: &'static str) -> Self {
        self.scopes
            .extend(list.split(',').map(str::trim).filter(|s| !s.is_empty()));
        self
    }

    #[inline]
    pub fn role(&self) -> FieldRole {
        self.role
    }

    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
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
}

#[cfg(test)]
mod tests {
    use super::{FieldRole, FieldTag};

    #[test]
    fn parse_grammar() {
        let tag = FieldTag::parse("attr,intstring,readonly,string").unwrap();
        assert_eq!(tag.role(), FieldRole::Attr);
        assert_eq!(tag.name(), Some("intstring"));
        assert!(tag.is_read_only());
        assert!(tag.is_quoted());
        assert!(!tag.skips_if_empty());

        let tag = FieldTag::parse("id,test-structs").unwrap();
        assert_eq!(tag.role(), FieldRole::Id);
        assert_eq!(tag.name(), Some("test-structs"));

        let tag = FieldTag::parse("attr,,omitempty").unwrap();
        assert_eq!(tag.name(), None);
        assert!(tag.skips_if_empty());

        assert_eq!(FieldTag::parse("link").unwrap(), FieldTag::new(FieldRole::Link));
        assert!(FieldTag::parse("attribute,name").is_none());
        assert!(FieldTag::parse("").is_none());
    }

    #[test]
    fn modifiers_only_for_attributes() {
        let tag = FieldTag::parse("link,self,readonly").unwrap();
        assert!(!tag.is_read_only());
    }

    #[test]
    fn scope_lists() {
        let tag = FieldTag::new(FieldRole::Attr).scoped("2, 3,").scoped("admin");
        assert_eq!(tag.scopes(), ["2", "3", "admin"]);
    }
}
