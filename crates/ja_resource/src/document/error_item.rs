use alloc::string::{String, ToString};
use core::fmt;

use serde::{Deserialize, Serialize};

/// Location of the offending member of a request document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    pub pointer: String,
}

/// One entry of a document's `errors` list.
///
/// Empty members are left out of the encoding. `Display` shows the detail.
///
/// # Examples
///
/// ```
/// use ja_resource::document::ErrorItem;
///
/// let item = ErrorItem::invalid_attribute("/data/attributes/name", "name can't be blank");
/// assert_eq!(item.status_code(), 422);
/// assert_eq!(
///     serde_json::to_string(&item).unwrap(),
///     r#"{"status":"422","source":{"pointer":"/data/attributes/name"},"title":"Invalid Attribute","detail":"name can't be blank"}"#,
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl ErrorItem {
    fn with_status(status: &str, title: &str, detail: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            title: title.to_string(),
            detail: detail.into(),
            ..Self::default()
        }
    }

    /// 404 for a missing record.
    pub fn record_not_found() -> Self {
        Self::with_status(
            "404",
            "Record Not Found",
            "The record you are looking for does not exist",
        )
    }

    /// 404 for an unknown route.
    pub fn page_not_found() -> Self {
        Self::with_status(
            "404",
            "Page Not Found",
            "The page you are looking for does not exist",
        )
    }

    /// 500 carrying `detail`.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::with_status("500", "Internal Server Error", detail)
    }

    /// 422 pointing at the attribute that failed validation.
    pub fn invalid_attribute(pointer: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            source: Some(ErrorSource {
                pointer: pointer.into(),
            }),
            ..Self::with_status("422", "Invalid Attribute", detail)
        }
    }

    /// 400 for a request that can't be processed.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::with_status("400", "Inprocessible Entry", detail)
    }

    /// 401.
    pub fn unauthorized() -> Self {
        Self::with_status(
            "401",
            "Unauthorized Request",
            "You are forbidden from accessing this page",
        )
    }

    /// Sets the application specific error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// The numeric status, `0` when the status isn't a number.
    pub fn status_code(&self) -> u16 {
        self.status.parse().unwrap_or(0)
    }
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl core::error::Error for ErrorItem {}

#[cfg(test)]
mod tests {
    use super::ErrorItem;
    use alloc::string::ToString;

    #[test]
    fn constructors() {
        let cases = [
            (ErrorItem::record_not_found(), 404, "Record Not Found"),
            (ErrorItem::page_not_found(), 404, "Page Not Found"),
            (ErrorItem::internal("boom"), 500, "Internal Server Error"),
            (ErrorItem::bad_request("bad"), 400, "Inprocessible Entry"),
            (ErrorItem::unauthorized(), 401, "Unauthorized Request"),
        ];
        for (item, status, title) in cases {
            assert_eq!(item.status_code(), status);
            assert_eq!(item.title, title);
            assert!(item.source.is_none());
        }
        assert_eq!(ErrorItem::internal("boom").to_string(), "boom");
    }

    #[test]
    fn encoding_omits_empty_members() {
        let item = ErrorItem::record_not_found().with_code("E1");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"code":"E1","status":"404","title":"Record Not Found","detail":"The record you are looking for does not exist"}"#
        );
        assert_eq!(serde_json::to_string(&ErrorItem::default()).unwrap(), "{}");
        assert_eq!(ErrorItem::default().status_code(), 0);
    }
}
