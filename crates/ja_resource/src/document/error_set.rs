use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::HookError;
use crate::document::ErrorItem;

/// The `errors` member of a document.
///
/// Encodes as a plain list of [`ErrorItem`]s.
///
/// # Examples
///
/// ```
/// use ja_resource::document::{ErrorItem, ErrorSet};
///
/// let mut errors = ErrorSet::new();
/// errors.add(ErrorItem::record_not_found());
/// errors.add("database unreachable");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.status_code(), 404);
/// assert_eq!(errors.iter().nth(1).unwrap().status, "500");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(Vec<ErrorItem>);

impl ErrorSet {
    #[inline]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records `err`.
    ///
    /// Sets are merged, items are kept as they are and hook failures are
    /// unwrapped. Any other error becomes an internal error.
    pub fn add<E: Into<HookError>>(&mut self, err: E) {
        let err: HookError = err.into();

        let err = match err.downcast::<ErrorSet>() {
            Ok(set) => return self.0.extend(set.0),
            Err(err) => err,
        };
        let err = match err.downcast::<ErrorItem>() {
            Ok(item) => return self.0.push(*item),
            Err(err) => err,
        };
        match err.downcast::<crate::Error>() {
            Ok(inner) => match *inner {
                crate::Error::Hook(hook) => self.add(hook),
                other => self.0.push(ErrorItem::internal(other.to_string())),
            },
            Err(err) => self.0.push(ErrorItem::internal(err.to_string())),
        }
    }

    #[inline]
    pub fn push(&mut self, item: ErrorItem) {
        self.0.push(item);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ErrorItem> {
        self.0.iter()
    }

    /// Status of the first error, or `200` when there is none.
    pub fn status_code(&self) -> u16 {
        self.0.first().map_or(200, ErrorItem::status_code)
    }
}

impl From<ErrorItem> for ErrorSet {
    fn from(item: ErrorItem) -> Self {
        Self(Vec::from([item]))
    }
}

impl Extend<ErrorItem> for ErrorSet {
    fn extend<T: IntoIterator<Item = ErrorItem>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a ErrorItem;
    type IntoIter = core::slice::Iter<'a, ErrorItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

impl core::error::Error for ErrorSet {}

#[cfg(test)]
mod tests {
    use super::ErrorSet;
    use crate::document::ErrorItem;
    use crate::{Error, HookError};
    use alloc::string::ToString;
    use alloc::vec::Vec;

    #[test]
    fn add_flattens() {
        let mut inner = ErrorSet::new();
        inner.add(ErrorItem::unauthorized());
        inner.add(ErrorItem::page_not_found());

        let mut errors = ErrorSet::new();
        errors.add(inner);
        errors.add(Error::Hook(HookError::from(ErrorItem::bad_request("bad"))));
        errors.add(Error::InvalidInput);

        let statuses: Vec<u16> = errors.iter().map(ErrorItem::status_code).collect();
        assert_eq!(statuses, [401, 404, 400, 500]);
        assert_eq!(errors.iter().last().unwrap().detail, "document has no primary data");
        assert_eq!(errors.status_code(), 401);
    }

    #[test]
    fn empty_set() {
        let errors = ErrorSet::new();
        assert!(errors.is_empty());
        assert_eq!(errors.status_code(), 200);
        assert_eq!(serde_json::to_string(&errors).unwrap(), "[]");
    }

    #[test]
    fn display_joins_details() {
        let mut errors = ErrorSet::from(ErrorItem::internal("a"));
        errors.push(ErrorItem::internal("b"));
        assert_eq!(errors.to_string(), "a; b");
    }
}
