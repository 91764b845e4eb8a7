use ja_macro_utils::full_path::{NoneFP, SomeFP};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, WhereClause, parse_quote};

use crate::derive_data::{FieldKind, ResourceStruct, Role, StructField};
use crate::utils::ident_name;

/// Generate the `Resource` impl.
///
/// ```ignore
/// impl Resource for Foo {
///     fn type_ident() -> &'static str { "Foo" }
///     fn field_table() -> FieldTable<Self> {
///         FieldTable::<Self>::with_capacity(2)
///             .with_field("id", Some(FieldTag::new(FieldRole::Id)), FieldAccessor::<Self>::new::<u64>(..))
///             .with_embedded::<Bar>("bar", |r: &Self| &r.bar, |r: &mut Self| &mut r.bar)
///     }
/// }
/// ```
pub(crate) fn impl_trait_resource(data: &ResourceStruct) -> TokenStream {
    let ja_resource_path = data.ja_resource_path();
    let resource_ = crate::path::resource_(ja_resource_path);
    let field_table_ = crate::path::field_table_(ja_resource_path);

    let fields: Vec<&StructField> = data
        .fields
        .iter()
        .filter(|f| !matches!(f.attrs.kind, FieldKind::Skipped))
        .collect();

    let capacity = fields.len();
    let entries = fields.iter().map(|field| field_entry(field, ja_resource_path));

    let ident = data.ident;
    let type_ident = ident_name(ident);
    let (impl_generics, ty_generics, where_clause) = data.generics.split_for_impl();
    let where_clause = bounded_where_clause(data, &fields, where_clause);

    quote! {
        impl #impl_generics #resource_ for #ident #ty_generics #where_clause {
            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            fn field_table() -> #field_table_<Self> {
                #field_table_::<Self>::with_capacity(#capacity)
                    #(#entries)*
            }
        }
    }
}

fn field_entry(field: &StructField, ja_resource_path: &syn::Path) -> TokenStream {
    let member = field.ident;
    let name = ident_name(member);
    let ty = field.ty;

    if let FieldKind::Embedded = field.attrs.kind {
        return quote! {
            .with_embedded::<#ty>(#name, |r: &Self| &r.#member, |r: &mut Self| &mut r.#member)
        };
    }

    let field_accessor_ = crate::path::field_accessor_(ja_resource_path);
    let tag = field_tag(field, ja_resource_path);

    quote! {
        .with_field(
            #name,
            #tag,
            #field_accessor_::<Self>::new::<#ty>(|r: &Self| &r.#member, |r: &mut Self| &mut r.#member),
        )
    }
}

/// `None`, or `Some(FieldTag::new(FieldRole::Attr).named("x").quoted() ...)`.
fn field_tag(field: &StructField, ja_resource_path: &syn::Path) -> TokenStream {
    let FieldKind::Tagged { role, name } = &field.attrs.kind else {
        return quote! { #NoneFP };
    };

    let field_tag_ = crate::path::field_tag_(ja_resource_path);
    let field_role_ = crate::path::field_role_(ja_resource_path);
    let variant = Ident::new(role.variant(), Span::call_site());

    let mut modifiers = Vec::new();
    if let Some(name) = name {
        modifiers.push(quote! { .named(#name) });
    }
    if *role == Role::Attr {
        let attrs = &field.attrs;
        if attrs.read_only {
            modifiers.push(quote! { .read_only() });
        }
        if attrs.quoted {
            modifiers.push(quote! { .quoted() });
        }
        if attrs.omit_empty {
            modifiers.push(quote! { .omit_empty() });
        }
        if let Some(scope) = &attrs.scope {
            modifiers.push(quote! { .scoped(#scope) });
        }
    }

    quote! {
        #SomeFP(#field_tag_::new(#field_role_::#variant) #(#modifiers)*)
    }
}

/// Generic structs get one bound per listed field type.
fn bounded_where_clause(
    data: &ResourceStruct,
    fields: &[&StructField],
    where_clause: Option<&WhereClause>,
) -> Option<WhereClause> {
    if !data.is_generic() {
        return where_clause.cloned();
    }

    let ja_resource_path = data.ja_resource_path();
    let field_value_ = crate::path::field_value_(ja_resource_path);
    let resource_ = crate::path::resource_(ja_resource_path);

    let mut clause = where_clause.cloned().unwrap_or_else(|| parse_quote! { where });
    clause
        .predicates
        .push(parse_quote! { Self: ::core::marker::Send + ::core::marker::Sync + 'static });
    for field in fields {
        let ty = field.ty;
        clause.predicates.push(match field.attrs.kind {
            FieldKind::Embedded => parse_quote! { #ty: #resource_ },
            _ => parse_quote! { #ty: #field_value_ },
        });
    }
    Some(clause)
}
