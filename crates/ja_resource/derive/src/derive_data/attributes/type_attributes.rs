use syn::Attribute;

use crate::JSONAPI_ATTRIBUTE_NAME;

/// Type level options.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[jsonapi(hooks)]`: the type implements `ResourceHooks` itself.
    pub(crate) custom_hooks: bool,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(JSONAPI_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("hooks") {
                    this.custom_hooks = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown type attribute, expected `hooks`"))
                }
            })?;
        }

        Ok(this)
    }
}
