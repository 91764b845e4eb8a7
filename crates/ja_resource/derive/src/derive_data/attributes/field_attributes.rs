use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr, Token, meta::ParseNestedMeta};

use crate::JSONAPI_ATTRIBUTE_NAME;

/// Field roles, mirroring `ja_resource::info::FieldRole`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Id,
    Attr,
    Link,
    Rel,
}

impl Role {
    fn from_path(meta: &ParseNestedMeta) -> Option<Self> {
        let ident = meta.path.get_ident()?;
        match ident.to_string().as_str() {
            "id" => Some(Self::Id),
            "attr" => Some(Self::Attr),
            "link" => Some(Self::Link),
            "rel" => Some(Self::Rel),
            _ => None,
        }
    }

    /// Variant name of `FieldRole`.
    pub(crate) fn variant(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Attr => "Attr",
            Self::Link => "Link",
            Self::Rel => "Rel",
        }
    }
}

/// How a field enters the field table.
#[derive(Debug, Default)]
pub(crate) enum FieldKind {
    /// Listed without a tag.
    #[default]
    Plain,
    /// Listed with a tag.
    Tagged { role: Role, name: Option<LitStr> },
    /// Its own fields are spliced in.
    Embedded,
    /// Left out.
    Skipped,
}

/// Parsed `#[jsonapi(...)]` of one field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub(crate) kind: FieldKind,
    pub(crate) read_only: bool,
    pub(crate) quoted: bool,
    pub(crate) omit_empty: bool,
    pub(crate) scope: Option<LitStr>,
    /// First attribute-only modifier seen, for error reporting.
    modifier: Option<Span>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(JSONAPI_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }

        this.validate()?;
        Ok(this)
    }

    fn set_kind(&mut self, meta: &ParseNestedMeta, kind: FieldKind) -> syn::Result<()> {
        if !matches!(self.kind, FieldKind::Plain) {
            return Err(meta.error(
                "a field takes only one of `id`, `attr`, `link`, `rel`, `embed` or `skip`",
            ));
        }
        self.kind = kind;
        Ok(())
    }

    fn modifier(&mut self, meta: &ParseNestedMeta) {
        self.modifier.get_or_insert(meta.path.span());
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if let Some(role) = Role::from_path(&meta) {
            let name = if meta.input.peek(Token![=]) {
                let name: LitStr = meta.value()?.parse()?;
                (!name.value().is_empty()).then_some(name)
            } else {
                None
            };
            return self.set_kind(&meta, FieldKind::Tagged { role, name });
        }

        if meta.path.is_ident("embed") {
            return self.set_kind(&meta, FieldKind::Embedded);
        }
        if meta.path.is_ident("skip") {
            return self.set_kind(&meta, FieldKind::Skipped);
        }

        if meta.path.is_ident("readonly") {
            self.read_only = true;
        } else if meta.path.is_ident("string") {
            self.quoted = true;
        } else if meta.path.is_ident("omitempty") {
            self.omit_empty = true;
        } else if meta.path.is_ident("scope") {
            self.scope = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unknown field attribute"));
        }
        self.modifier(&meta);
        Ok(())
    }

    fn validate(&self) -> syn::Result<()> {
        let Some(span) = self.modifier else {
            return Ok(());
        };
        match self.kind {
            FieldKind::Tagged { role: Role::Attr, .. } => Ok(()),
            _ => Err(syn::Error::new(
                span,
                "`readonly`, `string`, `omitempty` and `scope` only apply to `attr` fields",
            )),
        }
    }
}
