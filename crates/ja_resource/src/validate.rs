//! Attribute validation that collects client-facing errors.
//!
//! ```
//! use ja_resource::validate::Validator;
//!
//! let mut v = Validator::new();
//! v.present("", "name");
//! v.string_length("abc", "password", Some(6), Some(18));
//! v.range(200, "age", None, Some(150));
//!
//! let errors = v.verify().unwrap_err();
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors.status_code(), 422);
//! assert_eq!(errors.to_string(), "name can't be blank; min length is 6; max value is 150");
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt::Display;
use std::sync::{PoisonError, RwLock};

use ja_utils::hash::{FixedHashState, HashMap};
use regex::Regex;

use crate::document::{ErrorItem, ErrorSet};

/// Collects [`ErrorItem::invalid_attribute`] entries pointing at
/// `/data/attributes/<field>`.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    errors: ErrorSet,
}

impl Validator {
    #[inline]
    pub const fn new() -> Self {
        Self {
            errors: ErrorSet::new(),
        }
    }

    fn reject(&mut self, field: &str, detail: impl Into<String>) {
        self.errors.push(ErrorItem::invalid_attribute(
            format!("/data/attributes/{field}"),
            detail,
        ));
    }

    /// `value` must not be empty.
    pub fn present(&mut self, value: &str, field: &str) {
        if value.is_empty() {
            self.reject(field, format!("{field} can't be blank"));
        }
    }

    /// `value` must have between `min` and `max` characters.
    pub fn string_length(&mut self, value: &str, field: &str, min: Option<usize>, max: Option<usize>) {
        let length = value.chars().count();
        if let Some(min) = min
            && length < min
        {
            self.reject(field, format!("min length is {min}"));
        }
        if let Some(max) = max
            && length > max
        {
            self.reject(field, format!("max length is {max}"));
        }
    }

    /// `value` must lie within `min..=max`.
    pub fn range<T: PartialOrd + Display>(&mut self, value: T, field: &str, min: Option<T>, max: Option<T>) {
        if let Some(min) = min
            && value < min
        {
            self.reject(field, format!("min value is {min}"));
        }
        if let Some(max) = max
            && value > max
        {
            self.reject(field, format!("max value is {max}"));
        }
    }

    /// `value` must match the regular expression `pattern`.
    ///
    /// Compiled patterns are kept for the life of the process. A pattern that
    /// does not compile rejects every value.
    pub fn format(&mut self, value: &str, field: &str, pattern: &str) {
        match compiled(pattern) {
            Ok(regex) => self.matches(value, field, &regex),
            Err(err) => {
                log::warn!("invalid format pattern for {field}: {err}");
                self.reject(field, "invalid format");
            }
        }
    }

    /// `value` must match `regex`.
    pub fn matches(&mut self, value: &str, field: &str, regex: &Regex) {
        if !regex.is_match(value) {
            self.reject(field, "invalid format");
        }
    }

    /// Errors collected so far.
    #[inline]
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Err` with every collected error, if any.
    pub fn verify(self) -> Result<(), ErrorSet> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

// -----------------------------------------------------------------------------
// Pattern cache

static PATTERNS: RwLock<HashMap<Box<str>, Regex>> = RwLock::new(HashMap::with_hasher(FixedHashState));

fn compiled(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(regex) = PATTERNS.read().unwrap_or_else(PoisonError::into_inner).get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern)?;
    PATTERNS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(Box::from(pattern))
        .or_insert_with(|| regex.clone());
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::{PATTERNS, PoisonError, Validator, compiled};
    use alloc::vec::Vec;
    use regex::Regex;

    #[test]
    fn passes() {
        let mut v = Validator::new();
        v.present("x", "name");
        v.string_length("héllo", "name", Some(5), Some(5));
        v.range(1.5, "ratio", Some(0.0), Some(2.0));
        v.range(10u64, "count", None, None);
        v.format("10.0.0.1", "ip", r"\A(\d{1,3}\.){3}\d{1,3}\z");
        assert!(v.is_valid());
        assert!(v.verify().is_ok());
    }

    #[test]
    fn collects_pointers_and_details() {
        let mut v = Validator::new();
        v.string_length("toolong", "code", None, Some(3));
        v.range(-1, "age", Some(0), None);
        v.format("abc", "ip", r"\A\d+\z");
        v.format("abc", "broken", "(");

        let details: Vec<(&str, &str)> = v
            .errors()
            .iter()
            .map(|e| (e.source.as_ref().unwrap().pointer.as_str(), e.detail.as_str()))
            .collect();
        assert_eq!(
            details,
            [
                ("/data/attributes/code", "max length is 3"),
                ("/data/attributes/age", "min value is 0"),
                ("/data/attributes/ip", "invalid format"),
                ("/data/attributes/broken", "invalid format"),
            ]
        );
    }

    #[test]
    fn patterns_compile_once() {
        let pattern = r"\A[a-z]+-cached\z";
        let first = compiled(pattern).unwrap();
        let second = compiled(pattern).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(
            PATTERNS
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains_key(pattern)
        );
        assert!(compiled("(").is_err());

        let mut v = Validator::new();
        v.format("abc-cached", "slug", pattern);
        v.format("abc-cached", "slug", pattern);
        v.matches("ABC", "code", &Regex::new(r"\A[A-Z]+\z").unwrap());
        assert!(v.is_valid());

        v.matches("abc", "code", &first);
        assert_eq!(v.errors().len(), 1);
    }

    #[test]
    fn errors_feed_hooks() {
        fn check(name: &str) -> Result<(), crate::HookError> {
            let mut v = Validator::new();
            v.present(name, "name");
            v.verify()?;
            Ok(())
        }

        let mut errors = crate::document::ErrorSet::new();
        errors.add(check("").unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.status_code(), 422);
    }
}
