use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::ErrorSet;
use crate::{DynResource, Error, Resource, Result};

// -----------------------------------------------------------------------------
// MetaData

/// Paging information of a collection response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaData {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

// -----------------------------------------------------------------------------
// Payload

/// Primary or included data of a [`Response`].
pub enum Payload<'a> {
    /// A single resource object.
    One(&'a mut dyn DynResource),
    /// A list of resource objects, possibly of mixed types.
    Many(Vec<&'a mut dyn DynResource>),
    /// Pre-built JSON written as it is.
    Raw(Value),
}

impl<'a> Payload<'a> {
    #[inline]
    pub fn one<R: Resource>(record: &'a mut R) -> Self {
        Self::One(record)
    }

    pub fn many<R: Resource>(records: &'a mut [R]) -> Self {
        Self::Many(
            records
                .iter_mut()
                .map(|record| record as &mut dyn DynResource)
                .collect(),
        )
    }

    fn encode_into(&mut self, scope: &str, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Self::One(record) => record.encode_into(scope, out),
            Self::Many(records) => {
                out.push(b'[');
                for (index, record) in records.iter_mut().enumerate() {
                    if index > 0 {
                        out.push(b',');
                    }
                    record.encode_into(scope, out)?;
                }
                out.push(b']');
                Ok(())
            }
            Self::Raw(value) => serde_json::to_writer(&mut *out, value).map_err(Error::Encode),
        }
    }
}

impl core::fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::One(record) => f.debug_tuple("One").field(&record.resource_type()).finish(),
            Self::Many(records) => f.debug_tuple("Many").field(&records.len()).finish(),
            Self::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Response

/// A top-level document.
///
/// Members are written in the order `data`, `included`, `meta`, `errors`,
/// each only when present. Resources are encoded with [`Response::scope`].
///
/// # Examples
///
/// ```
/// use ja_resource::derive::Resource;
/// use ja_resource::document::{ErrorItem, MetaData, Payload, Response};
///
/// #[derive(Resource, Default)]
/// struct Tag {
///     #[jsonapi(id = "tags")]
///     id: u32,
///     #[jsonapi(attr)]
///     label: String,
/// }
///
/// let mut tags = [Tag { id: 1, label: "rust".into() }];
/// let mut response = Response {
///     data: Some(Payload::many(&mut tags)),
///     meta: Some(MetaData { total: 1, limit: 10, ..Default::default() }),
///     ..Default::default()
/// };
/// assert_eq!(
///     response.encode().unwrap(),
///     br#"{"data":[{"id":"1","type":"tags","attributes":{"label":"rust"}}],"meta":{"total":1,"limit":10,"offset":0}}"#,
/// );
/// assert_eq!(response.status_code(), 200);
///
/// let mut failed = Response::default();
/// failed.errors.add(ErrorItem::record_not_found());
/// assert_eq!(failed.status_code(), 404);
/// ```
#[derive(Debug, Default)]
pub struct Response<'a> {
    pub data: Option<Payload<'a>>,
    pub included: Option<Payload<'a>>,
    pub meta: Option<MetaData>,
    pub scope: &'a str,
    pub errors: ErrorSet,
}

impl<'a> Response<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A response carrying only `errors`.
    pub fn from_errors(errors: impl Into<ErrorSet>) -> Self {
        Self {
            errors: errors.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_scope(mut self, scope: &'a str) -> Self {
        self.scope = scope;
        self
    }

    /// Status of the first error, or `200`.
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.errors.status_code()
    }

    /// Encodes the document.
    pub fn encode(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(128);
        let mut first = true;
        out.push(b'{');

        let mut member = |out: &mut Vec<u8>, name: &[u8]| {
            if !core::mem::take(&mut first) {
                out.push(b',');
            }
            out.push(b'"');
            out.extend_from_slice(name);
            out.extend_from_slice(b"\":");
        };

        if let Some(data) = &mut self.data {
            member(&mut out, b"data");
            data.encode_into(self.scope, &mut out)?;
        }
        if let Some(included) = &mut self.included {
            member(&mut out, b"included");
            included.encode_into(self.scope, &mut out)?;
        }
        if let Some(meta) = &self.meta {
            member(&mut out, b"meta");
            serde_json::to_writer(&mut out, meta).map_err(Error::Encode)?;
        }
        if !self.errors.is_empty() {
            member(&mut out, b"errors");
            serde_json::to_writer(&mut out, &self.errors).map_err(Error::Encode)?;
        }

        out.push(b'}');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::{Payload, Response};
    use crate::DynResource;
    use crate::derive::Resource;
    use crate::document::ErrorItem;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use serde_json::json;

    #[derive(Resource, Default)]
    struct Post {
        #[jsonapi(id = "posts")]
        id: u64,
        #[jsonapi(attr)]
        title: String,
        #[jsonapi(attr, scope = "admin")]
        secret: String,
    }

    #[derive(Resource, Default)]
    struct Author {
        #[jsonapi(id = "authors")]
        id: u64,
        #[jsonapi(attr)]
        name: String,
    }

    fn text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn empty_document() {
        assert_eq!(text(Response::new().encode().unwrap()), "{}");
    }

    #[test]
    fn single_with_mixed_included() {
        let mut post = Post { id: 1, title: "t".to_string(), secret: "s".to_string() };
        let mut author = Author { id: 2, name: "ann".to_string() };
        let mut other = Post { id: 3, title: "u".to_string(), secret: String::new() };

        let mut response = Response {
            data: Some(Payload::one(&mut post)),
            included: Some(Payload::Many(vec![
                &mut author as &mut dyn DynResource,
                &mut other as &mut dyn DynResource,
            ])),
            ..Default::default()
        }
        .with_scope("public");

        assert_eq!(
            text(response.encode().unwrap()),
            r#"{"data":{"id":"1","type":"posts","attributes":{"title":"t"}},"included":[{"id":"2","type":"authors","attributes":{"name":"ann"}},{"id":"3","type":"posts","attributes":{"title":"u"}}]}"#
        );
    }

    #[test]
    fn raw_data_and_errors() {
        let mut response = Response::from_errors(ErrorItem::unauthorized());
        response.data = Some(Payload::Raw(json!({"ok": false})));

        assert_eq!(
            text(response.encode().unwrap()),
            r#"{"data":{"ok":false},"errors":[{"status":"401","title":"Unauthorized Request","detail":"You are forbidden from accessing this page"}]}"#
        );
        assert_eq!(response.status_code(), 401);
    }

    #[test]
    fn empty_collection() {
        let mut posts: [Post; 0] = [];
        let mut response = Response {
            data: Some(Payload::many(&mut posts)),
            ..Default::default()
        };
        assert_eq!(text(response.encode().unwrap()), r#"{"data":[]}"#);
    }
}
