use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use ja_utils::hash::HashSet;

use crate::Params;

// -----------------------------------------------------------------------------
// SortField

/// One `sort` key. A leading `-` sorts descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortField {
    pub field: String,
    pub descending: bool,
}

impl SortField {
    /// Parses `name` or `-name`. Empty input gives `None`.
    pub fn parse(word: &str) -> Option<Self> {
        let word = word.trim();
        let (field, descending) = match word.strip_prefix('-') {
            Some(field) => (field, true),
            None => (word, false),
        };
        (!field.is_empty()).then(|| Self {
            field: field.to_owned(),
            descending,
        })
    }

    /// `ORDER BY` term: `field` or `field DESC`.
    pub fn to_sql(&self) -> String {
        if self.descending {
            format!("{} DESC", self.field)
        } else {
            self.field.clone()
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            f.write_str("-")?;
        }
        f.write_str(&self.field)
    }
}

// -----------------------------------------------------------------------------
// Query

/// Parsed JSON:API query parameters.
///
/// Recognised keys are `sort`, `limit`, `offset`, `format`, `include`,
/// `filter[...]` and `query[...]`; anything else is ignored. When a key
/// repeats, its first value is used. Numbers that don't parse read as 0.
///
/// # Examples
///
/// ```
/// use ja_query::Query;
///
/// let mut q = Query::from_query_string("?sort=-name,id&filter[active]=1&include=author,tags");
/// q.default_limit(30);
///
/// assert_eq!(q.limit, 30);
/// assert_eq!(q.sort[0].to_sql(), "name DESC");
/// assert_eq!(q.filters.get("active"), Some("1"));
/// assert_eq!(q.include, ["author", "tags"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub limit: u64,
    pub offset: u64,
    pub format: String,
    pub sort: Vec<SortField>,
    pub include: Vec<String>,
    pub filters: Params,
    pub queries: Params,
}

impl Query {
    /// Builds a query from decoded `(name, value)` pairs.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        let mut seen: HashSet<String> = HashSet::default();

        for (key, value) in params {
            let (key, value) = (key.as_ref(), value.as_ref());

            if let Some(name) = group_key(key, "filter") {
                query.filters.insert(name, value);
                continue;
            }
            if let Some(name) = group_key(key, "query") {
                query.queries.insert(name, value);
                continue;
            }
            if !seen.insert(key.to_owned()) {
                continue;
            }

            match key {
                "sort" => query.sort = value.split(',').filter_map(SortField::parse).collect(),
                "limit" => query.limit = number(value),
                "offset" => query.offset = number(value),
                "format" => query.format = value.to_owned(),
                "include" => {
                    query.include = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(ToOwned::to_owned)
                        .collect();
                }
                _ => log::trace!("ignoring query parameter {key:?}"),
            }
        }

        query
    }

    /// Parses a URL query string, with or without the leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_params(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Sorts by `field` (`-field` for descending) when no sort was given.
    pub fn default_sort(&mut self, field: &str) {
        if self.sort.is_empty() {
            self.sort.extend(SortField::parse(field));
        }
    }

    /// Uses `limit` when no limit was given.
    pub fn default_limit(&mut self, limit: u64) {
        if self.limit == 0 {
            self.limit = limit;
        }
    }

    /// Comma-joined `ORDER BY` terms; empty without sort keys.
    pub fn order_by(&self) -> String {
        self.sort
            .iter()
            .map(SortField::to_sql)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// `name` from `group[name]`.
fn group_key<'a>(key: &'a str, group: &str) -> Option<&'a str> {
    key.strip_prefix(group)?.strip_prefix('[')?.strip_suffix(']')
}

fn number(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Query, SortField};
    use alloc::string::ToString;

    const URL: &str = "format=short&query[name]=john&query[email]=john1&filter[active]=1&filter[id]=1,2,3&limit=10&offset=1&sort=-name,id";

    #[test]
    fn url_params() {
        let q = Query::from_query_string(URL);

        assert_eq!(q.format, "short");
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 1);
        assert_eq!(
            q.sort,
            [
                SortField { field: "name".to_string(), descending: true },
                SortField { field: "id".to_string(), descending: false },
            ]
        );
        assert_eq!(q.order_by(), "name DESC,id");

        assert_eq!(q.filters.len(), 2);
        assert_eq!(q.filters.get("active"), Some("1"));
        assert_eq!(q.filters.get("id"), Some("1,2,3"));
        assert_eq!(q.queries.len(), 2);
        assert_eq!(q.queries.get("name"), Some("john"));
        assert_eq!(q.queries.get("email"), Some("john1"));
    }

    #[test]
    fn percent_encoded_brackets() {
        let q = Query::from_query_string("?filter%5Bname%5D=a%20b&include=x");
        assert_eq!(q.filters.get("name"), Some("a b"));
        assert_eq!(q.include, ["x"]);
    }

    #[test]
    fn defaults_and_bad_numbers() {
        let mut q = Query::from_params([("limit", "ten"), ("offset", "-1"), ("sort", ",,")]);
        assert_eq!(q.limit, 0);
        assert_eq!(q.offset, 0);
        assert!(q.sort.is_empty());

        q.default_limit(30);
        q.default_sort("-created_at");
        assert_eq!(q.limit, 30);
        assert_eq!(q.sort[0].to_string(), "-created_at");

        q.default_limit(50);
        q.default_sort("id");
        assert_eq!(q.limit, 30);
        assert_eq!(q.order_by(), "created_at DESC");
    }

    #[test]
    fn first_value_wins() {
        let q = Query::from_params([("limit", "5"), ("limit", "7"), ("filter[a]", "1"), ("filter[a]", "2")]);
        assert_eq!(q.limit, 5);
        assert_eq!(q.filters.get("a"), Some("1"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let q = Query::from_params([("page", "2"), ("filter", "x"), ("filter[", "y")]);
        assert_eq!(q, Query::default());
    }
}
