use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `self` and `related` links of a resource or relationship.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "String::is_empty")]
    pub self_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub related: String,
}

impl Links {
    pub fn new(self_link: impl Into<String>, related: impl Into<String>) -> Self {
        Self {
            self_link: self_link.into(),
            related: related.into(),
        }
    }

    /// Only a related link.
    pub fn related(related: impl Into<String>) -> Self {
        Self::new(String::new(), related)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.self_link.is_empty() && self.related.is_empty()
    }
}

/// A relationship member: `{"links":{...},"data":...}`.
///
/// Empty links and absent data are left out, so a default relation encodes
/// as `{}`.
///
/// # Examples
///
/// ```
/// use ja_resource::document::{Links, Relation};
/// use serde_json::json;
///
/// let rel = Relation {
///     links: Links::related("/posts/1/comments"),
///     data: Some(json!([{"id": "5", "type": "comments"}])),
/// };
/// assert_eq!(
///     serde_json::to_string(&rel).unwrap(),
///     r#"{"links":{"related":"/posts/1/comments"},"data":[{"id":"5","type":"comments"}]}"#,
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relation {
    #[serde(skip_serializing_if = "Links::is_empty")]
    pub links: Links,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::{Links, Relation};
    use serde_json::json;

    #[test]
    fn relation_shapes() {
        let mut rel = Relation::default();
        assert_eq!(serde_json::to_string(&rel).unwrap(), "{}");

        rel.links = Links::new("self/1", "");
        assert_eq!(serde_json::to_string(&rel).unwrap(), r#"{"links":{"self":"self/1"}}"#);

        rel.links = Links::default();
        rel.data = Some(json!(null));
        assert_eq!(serde_json::to_string(&rel).unwrap(), r#"{"data":null}"#);
    }

    #[test]
    fn reads_back() {
        let rel: Relation = serde_json::from_str(r#"{"links":{"self":"a"}}"#).unwrap();
        assert_eq!(rel.links.self_link, "a");
        assert!(rel.data.is_none());
    }
}
