use alloc::string::String;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Run {
    Lower,
    Upper,
    Uppers,
}

/// Splits a CamelCase identifier into lowercase words joined by `sep`.
///
/// A run of capitals is one word unless its last capital starts a lowercase
/// word: `HTTPServer` gives `http-server`. Digits stay with the word they
/// follow.
///
/// # Examples
///
/// ```
/// use ja_resource::info::transform;
///
/// assert_eq!(transform("UserID", '-'), "user-id");
/// assert_eq!(transform("HTTPServer", '-'), "http-server");
/// assert_eq!(transform("Some123Number", '_'), "some123_number");
/// ```
pub fn transform(ident: &str, sep: char) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut run = Run::Lower;
    let mut pending: Option<char> = None;

    for (index, c) in ident.char_indices() {
        if (index > 1 && run == Run::Upper) || (run == Run::Uppers && c.is_lowercase()) {
            out.push(sep);
        }
        if let Some(prev) = pending {
            out.push(prev);
        }
        if c.is_uppercase() {
            run = match run {
                Run::Lower => Run::Upper,
                _ => Run::Uppers,
            };
            pending = Some(c.to_lowercase().next().unwrap_or(c));
        } else {
            run = Run::Lower;
            pending = Some(c);
        }
    }

    if let Some(prev) = pending {
        out.push(prev);
    }
    out
}

/// Resource type name derived from a type identifier.
#[inline]
pub fn kebab_case(ident: &str) -> String {
    transform(ident, '-')
}

/// Database column name derived from a declared field name.
#[inline]
pub fn column_name(ident: &str) -> String {
    transform(ident, '_')
}

/// Whether `key` may be used as a wire name.
///
/// Letters, digits, space and ``!#$%&()*+-./:<=>?@[]^_{|}~`` are allowed.
/// The empty string is not.
pub fn valid_key(key: &str) -> bool {
    const PUNCTUATION: &str = "!#$%&()*+-./:<=>?@[]^_{|}~ ";

    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || PUNCTUATION.contains(c))
}

#[cfg(test)]
mod tests {
    use super::{column_name, kebab_case, valid_key};

    #[test]
    fn column_names() {
        let cases = [
            ("Id", "id"),
            ("ID", "id"),
            ("Name", "name"),
            ("NameId", "name_id"),
            ("NameID", "name_id"),
            ("JSON", "json"),
            ("SomeJSON", "some_json"),
            ("CamelCase", "camel_case"),
            ("SomeLongJSONStringFormat", "some_long_json_string_format"),
            ("Some123Number", "some123_number"),
            ("api_age", "api_age"),
        ];
        for (ident, want) in cases {
            assert_eq!(column_name(ident), want, "{ident}");
        }
    }

    #[test]
    fn type_names() {
        assert_eq!(kebab_case("UserProfile"), "user-profile");
        assert_eq!(kebab_case("HTTPServer"), "http-server");
        assert_eq!(kebab_case("UserID"), "user-id");
        assert_eq!(kebab_case("A"), "a");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn keys() {
        assert!(valid_key("address-at"));
        assert!(valid_key("a b"));
        assert!(valid_key("[x]"));
        assert!(valid_key("ünïcode"));
        assert!(!valid_key(""));
        assert!(!valid_key("quo\"te"));
        assert!(!valid_key("back\\slash"));
        assert!(!valid_key("comma,"));
    }
}
