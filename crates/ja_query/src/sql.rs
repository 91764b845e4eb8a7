use alloc::string::String;
use alloc::vec::Vec;

use ja_resource::info::column_name;
use ja_resource::{Error, Resource};

type NestedBuild = fn(&str) -> Result<String, Error>;

enum Relationship {
    /// Aggregated resource objects of a joined table.
    Nested {
        resource_type: &'static str,
        prefix: String,
        build: NestedBuild,
    },
    /// A `related` link computed by an SQL expression.
    Link { name: String, expr: String },
}

/// Builds a PostgreSQL expression that renders a resource object with
/// `json_build_object`.
///
/// Column names are the snake_case forms of the declared field names,
/// qualified with the table prefix. Quoted attributes and the id are cast to
/// `TEXT`.
///
/// # Examples
///
/// ```
/// use ja_query::ObjectBuilder;
/// use ja_resource::derive::Resource;
///
/// #[derive(Resource, Default)]
/// struct Author {
///     #[jsonapi(id = "authors")]
///     id: u64,
///     #[jsonapi(attr)]
///     full_name: String,
/// }
///
/// let sql = ObjectBuilder::new()
///     .with_attribute("posts", "count(p.id)")
///     .build::<Author>("a.")
///     .unwrap();
/// assert_eq!(
///     sql,
///     "json_build_object('id',a.id::TEXT,'type','authors','attributes',json_build_object('full_name',a.full_name,'posts',count(p.id)))",
/// );
/// ```
#[derive(Default)]
pub struct ObjectBuilder {
    attributes: Vec<(String, String)>,
    relations: Vec<Relationship>,
}

impl ObjectBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `expr` for attribute `name`, replacing its column if the
    /// resource has one and appending it otherwise.
    pub fn with_attribute(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.attributes.push((name.into(), expr.into()));
        self
    }

    /// Adds `R` as a relationship aggregated from the table at `prefix`.
    pub fn with_relation<R: Resource>(mut self, prefix: impl Into<String>) -> Self {
        self.relations.push(Relationship::Nested {
            resource_type: R::descriptor().resource_type(),
            prefix: prefix.into(),
            build: nested::<R>,
        });
        self
    }

    /// Adds relationship `name` with a `related` link given by `expr`.
    pub fn with_related_link(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.relations.push(Relationship::Link {
            name: name.into(),
            expr: expr.into(),
        });
        self
    }

    /// Renders the expression for `R` with columns qualified by `prefix`.
    pub fn build<R: Resource>(&self, prefix: &str) -> Result<String, Error> {
        let info = R::descriptor();
        let Some(identity) = info.identity() else {
            return Err(Error::TypeIncompatible {
                type_ident: info.type_ident(),
            });
        };

        let mut out = String::with_capacity(128);
        out.push_str("json_build_object('id',");
        out.push_str(prefix);
        out.push_str(&column_name(identity.name()));
        out.push_str("::TEXT,'type',");
        push_literal(&mut out, info.resource_type());

        let mut entries: Vec<String> = Vec::with_capacity(info.attributes().len());
        let mut extras: Vec<&(String, String)> = self.attributes.iter().collect();
        for field in info.attributes() {
            let name = field.wire_name();
            let mut entry = String::new();
            push_literal(&mut entry, name);
            entry.push(',');

            match extras.iter().position(|(extra, _)| extra == name) {
                Some(index) => entry.push_str(&extras.remove(index).1),
                None => {
                    entry.push_str(prefix);
                    entry.push_str(&column_name(field.name()));
                    if field.is_quoted() {
                        entry.push_str("::TEXT");
                    }
                }
            }
            entries.push(entry);
        }
        for (name, expr) in extras {
            let mut entry = String::new();
            push_literal(&mut entry, name);
            entry.push(',');
            entry.push_str(expr);
            entries.push(entry);
        }
        if !entries.is_empty() {
            out.push_str(",'attributes',json_build_object(");
            out.push_str(&entries.join(","));
            out.push(')');
        }

        if !self.relations.is_empty() {
            out.push_str(",'relationships',json_build_object(");
            for (index, relation) in self.relations.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                match relation {
                    Relationship::Nested {
                        resource_type,
                        prefix,
                        build,
                    } => {
                        push_literal(&mut out, resource_type);
                        out.push_str(",json_build_object('data',array_to_json(array_agg(");
                        out.push_str(&build(prefix)?);
                        out.push_str(")))");
                    }
                    Relationship::Link { name, expr } => {
                        push_literal(&mut out, name);
                        out.push_str(",json_build_object('links',json_build_object('related',");
                        out.push_str(expr);
                        out.push_str("))");
                    }
                }
            }
            out.push(')');
        }

        out.push(')');
        log::trace!("built sql object for {}", info.type_ident());
        Ok(out)
    }
}

fn nested<R: Resource>(prefix: &str) -> Result<String, Error> {
    ObjectBuilder::new().build::<R>(prefix)
}

/// Appends `text` as an SQL string literal.
fn push_literal(out: &mut String, text: &str) {
    out.push('\'');
    for c in text.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}

#[cfg(test)]
mod tests {
    use super::ObjectBuilder;
    use alloc::format;
    use alloc::string::String;
    use ja_resource::Error;
    use ja_resource::derive::Resource;

    #[derive(Resource, Default)]
    struct PgType {
        #[jsonapi(id = "types1")]
        id: u64,
        #[jsonapi(attr)]
        name: String,
        #[jsonapi(attr = "age", string)]
        api_age: i32,
    }

    #[derive(Resource, Default)]
    struct PgType2 {
        #[jsonapi(id = "types2")]
        id: u64,
        #[jsonapi(attr)]
        name: String,
    }

    const BASE: &str = "json_build_object('id',t1.id::TEXT,'type','types1','attributes',json_build_object('name',t1.name,'age',t1.api_age::TEXT";

    #[test]
    fn object() {
        let got = ObjectBuilder::new().build::<PgType>("t1.").unwrap();
        assert_eq!(got, format!("{BASE}))"));
    }

    #[test]
    fn extra_attributes() {
        let got = ObjectBuilder::new()
            .with_attribute("extra", "col")
            .build::<PgType>("t1.")
            .unwrap();
        assert_eq!(got, format!("{BASE},'extra',col))"));

        let got = ObjectBuilder::new()
            .with_attribute("name", "upper(t1.name)")
            .build::<PgType>("t1.")
            .unwrap();
        assert!(got.contains("'name',upper(t1.name),'age'"));
    }

    #[test]
    fn nested_relation() {
        let got = ObjectBuilder::new()
            .with_relation::<PgType2>("t4.")
            .build::<PgType>("t1.")
            .unwrap();
        let want = format!(
            "{BASE}),'relationships',json_build_object('types2',json_build_object('data',array_to_json(array_agg(json_build_object('id',t4.id::TEXT,'type','types2','attributes',json_build_object('name',t4.name)))))))"
        );
        assert_eq!(got, want);
    }

    #[test]
    fn related_link() {
        let got = ObjectBuilder::new()
            .with_related_link("types2", "'string/asdf'")
            .build::<PgType>("t1.")
            .unwrap();
        let want = format!(
            "{BASE}),'relationships',json_build_object('types2',json_build_object('links',json_build_object('related','string/asdf'))))"
        );
        assert_eq!(got, want);
    }

    #[derive(Resource, Default)]
    struct NotApi {
        id: u64,
        name: String,
    }

    #[test]
    fn requires_identity() {
        let err = ObjectBuilder::new().build::<NotApi>("").unwrap_err();
        assert!(matches!(err, Error::TypeIncompatible { type_ident: "NotApi" }));
    }
}
