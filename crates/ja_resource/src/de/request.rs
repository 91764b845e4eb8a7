use alloc::borrow::Cow;

use ja_utils::hash::HashMap;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Inbound document, borrowing attribute values from the input.
#[derive(Debug, Deserialize)]
pub struct Request<'a> {
    #[serde(borrow, default)]
    pub data: Option<RequestData<'a>>,
}

/// Primary data of an inbound document.
///
/// Attribute values stay undecoded until a field claims them.
#[derive(Debug, Deserialize)]
pub struct RequestData<'a> {
    #[serde(borrow, default)]
    pub id: Option<&'a RawValue>,
    #[serde(borrow, rename = "type", default)]
    pub kind: Cow<'a, str>,
    #[serde(borrow, default, deserialize_with = "null_as_default")]
    pub attributes: HashMap<Cow<'a, str>, &'a RawValue>,
}

// `"attributes":null` applies nothing.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl<'a> Request<'a> {
    /// Parses the envelope of `input`.
    #[inline]
    pub fn parse(input: &'a [u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(input)
    }
}

#[cfg(test)]
mod tests {
    use super::Request;

    #[test]
    fn borrowed_attributes() {
        let input = br#"{"data":{"id":100,"type":"test-structs","attributes":{"name":"John","sub":{"a":[1,2]}}}}"#;
        let request = Request::parse(input).unwrap();
        let data = request.data.unwrap();

        assert_eq!(data.kind, "test-structs");
        assert_eq!(data.id.unwrap().get(), "100");
        assert_eq!(data.attributes["name"].get(), r#""John""#);
        assert_eq!(data.attributes["sub"].get(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn missing_data() {
        assert!(Request::parse(b"{}").unwrap().data.is_none());
        assert!(Request::parse(br#"{"data":null}"#).unwrap().data.is_none());
        assert!(Request::parse(b"[1]").is_err());
    }

    #[test]
    fn null_attributes() {
        let input = br#"{"data":{"id":"1","type":"people","attributes":null}}"#;
        let data = Request::parse(input).unwrap().data.unwrap();
        assert!(data.attributes.is_empty());

        let input = br#"{"data":{"id":"1","type":"people"}}"#;
        assert!(Request::parse(input).unwrap().data.unwrap().attributes.is_empty());
    }
}
