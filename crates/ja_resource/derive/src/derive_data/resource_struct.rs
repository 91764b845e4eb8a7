use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Type, spanned::Spanned};

use crate::derive_data::{FieldAttributes, TypeAttributes};

/// One named field with its attributes.
pub(crate) struct StructField<'a> {
    pub(crate) ident: &'a Ident,
    pub(crate) ty: &'a Type,
    pub(crate) attrs: FieldAttributes,
}

/// A struct accepted by `#[derive(Resource)]`.
pub(crate) struct ResourceStruct<'a> {
    pub(crate) ident: &'a Ident,
    pub(crate) generics: &'a Generics,
    pub(crate) attrs: TypeAttributes,
    pub(crate) fields: Vec<StructField<'a>>,
    pub(crate) ja_resource_path: syn::Path,
}

impl<'a> ResourceStruct<'a> {
    pub(crate) fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Resource` can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Resource` requires a struct with named fields",
            ));
        };

        if let Some(lifetime) = ast
            .generics
            .params
            .iter()
            .find(|p| matches!(p, GenericParam::Lifetime(_)))
        {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Resource` types must be 'static and can't have lifetime parameters",
            ));
        }

        let mut fields = Vec::with_capacity(named.named.len());
        let mut errors: Option<syn::Error> = None;

        for field in &named.named {
            match FieldAttributes::parse_attrs(&field.attrs) {
                Ok(attrs) => fields.push(StructField {
                    // named fields always have an ident
                    ident: field.ident.as_ref().unwrap_or(&ast.ident),
                    ty: &field.ty,
                    attrs,
                }),
                Err(err) => match &mut errors {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self {
            ident: &ast.ident,
            generics: &ast.generics,
            attrs: TypeAttributes::parse_attrs(&ast.attrs)?,
            fields,
            ja_resource_path: crate::path::ja_resource(),
        })
    }

    #[inline]
    pub(crate) fn ja_resource_path(&self) -> &syn::Path {
        &self.ja_resource_path
    }

    /// Whether the struct has type or const parameters.
    #[inline]
    pub(crate) fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }
}
