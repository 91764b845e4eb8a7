//! Field-level change sets produced while decoding.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use serde_json::Value;

use crate::{Error, FieldValue, Result};

// -----------------------------------------------------------------------------
// Change

/// One leaf that differs between the record and the decoded input.
///
/// Nested values are addressed by dotted paths of serialized keys, such as
/// `address.city`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Change {
    pub field: String,
    pub previous: String,
    pub current: String,
}

impl Change {
    pub fn new(field: impl Into<String>, previous: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            previous: previous.into(),
            current: current.into(),
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.field, self.previous, self.current)
    }
}

// -----------------------------------------------------------------------------
// Changes

/// Ordered list of [`Change`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Changes(Vec<Change>);

impl Changes {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The change recorded for `field`, if any.
    pub fn find(&self, field: &str) -> Option<&Change> {
        self.0.iter().find(|change| change.field == field)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Change> {
        self.0.iter()
    }

    #[inline]
    pub fn push(&mut self, change: Change) {
        self.0.push(change);
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Change> {
        self.0
    }
}

impl fmt::Display for Changes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, change) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(change, f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Changes {
    type Item = &'a Change;
    type IntoIter = core::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Changes {
    type Item = Change;
    type IntoIter = alloc::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// -----------------------------------------------------------------------------
// Diff

/// Appends the differences between two values of one field to `out`.
pub(crate) fn diff_fields(
    field: &str,
    previous: &dyn FieldValue,
    current: &dyn FieldValue,
    out: &mut Changes,
) -> Result<()> {
    let previous = serde_json::to_value(previous.as_serialize()).map_err(Error::Encode)?;
    let current = serde_json::to_value(current.as_serialize()).map_err(Error::Encode)?;
    diff_values(field, &previous, &current, out);
    Ok(())
}

/// Appends the differences between two JSON values to `out`.
///
/// Objects recurse over the union of their keys in serialization order, keys
/// of `previous` first; a key missing on one side compares as the empty
/// string. Everything else is a leaf compared by its rendering.
///
/// # Examples
///
/// ```
/// use ja_resource::{Changes, diff::diff_values};
/// use serde_json::json;
///
/// let mut changes = Changes::new();
/// diff_values(
///     "map",
///     &json!({"a": "1", "c": {"a1": "11"}}),
///     &json!({"a": "1", "c": {"a1": "111"}, "d": 4}),
///     &mut changes,
/// );
///
/// assert_eq!(changes.to_string(), "map.c.a1: 11 -> 111\nmap.d:  -> 4");
/// ```
pub fn diff_values(path: &str, previous: &Value, current: &Value, out: &mut Changes) {
    match (previous, current) {
        (Value::Object(_), Value::Object(_) | Value::Null) | (Value::Null, Value::Object(_)) => {
            let keys = previous
                .as_object()
                .into_iter()
                .chain(current.as_object())
                .flat_map(|map| map.keys());

            let mut seen: Vec<&String> = Vec::new();
            for key in keys {
                if seen.contains(&key) {
                    continue;
                }
                seen.push(key);
                diff_values(
                    &format!("{path}.{key}"),
                    previous.get(key).unwrap_or(&Value::Null),
                    current.get(key).unwrap_or(&Value::Null),
                    out,
                );
            }
        }
        _ => {
            let (before, after) = (render(previous), render(current));
            if before != after {
                out.push(Change::new(path, before, after));
            }
        }
    }
}

/// Text form of a leaf: strings raw, `null` empty, arrays as `[a b c]`.
fn render(value: &Value) -> String {
    let mut out = String::new();
    render_into(value, &mut out);
    out
}

fn render_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                render_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (index, (key, item)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(' ');
                }
                out.push_str(key);
                out.push(':');
                render_into(item, out);
            }
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Change, Changes, diff_values, render};
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use serde_json::json;

    #[test]
    fn leaves() {
        assert_eq!(render(&json!([1, 2, 3])), "[1 2 3]");
        assert_eq!(render(&json!(null)), "");
        assert_eq!(render(&json!(1.5)), "1.5");
        assert_eq!(render(&json!({"a": [true]})), "{a:[true]}");
    }

    #[test]
    fn equal_values_produce_nothing() {
        let mut changes = Changes::new();
        let value = json!({"a": "1", "b": {"c": [1, 2]}});
        diff_values("map", &value, &value, &mut changes);
        assert!(changes.is_empty());
    }

    #[test]
    fn nested_keys() {
        let mut changes = Changes::new();
        diff_values(
            "sub",
            &json!({"country": "CTR", "city": "DT"}),
            &json!({"country": "CTR", "city": "DT1"}),
            &mut changes,
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.find("sub.city"), Some(&Change::new("sub.city", "DT", "DT1")));
    }

    #[test]
    fn keys_keep_their_order() {
        let mut changes = Changes::new();
        diff_values(
            "sub",
            &json!({"country": "CTR", "city": "DT"}),
            &json!({"country": "NL", "city": "DT1"}),
            &mut changes,
        );
        let fields: Vec<&str> = changes.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, ["sub.country", "sub.city"]);
    }

    #[test]
    fn object_replacing_null() {
        let mut changes = Changes::new();
        diff_values("sub", &json!(null), &json!({"city": "DT"}), &mut changes);
        assert_eq!(changes.to_string(), "sub.city:  -> DT");
    }

    #[test]
    fn kind_change_is_a_leaf() {
        let mut changes = Changes::new();
        diff_values("v", &json!("1"), &json!([1]), &mut changes);
        assert_eq!(changes.into_vec(), [Change::new("v", "1", "[1]")]);
    }
}
