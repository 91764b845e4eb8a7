/// Whether an encoded JSON value is the empty value of its type:
/// `null`, `false`, `""`, `[]`, `{}` or a zero number.
pub(crate) fn is_empty_encoding(encoded: &str) -> bool {
    match encoded.as_bytes() {
        b"null" | b"false" | b"\"\"" | b"[]" | b"{}" => true,
        [b'-' | b'0'..=b'9', ..] => is_zero_number(encoded),
        _ => false,
    }
}

fn is_zero_number(number: &str) -> bool {
    let mantissa = number.split(['e', 'E']).next().unwrap_or(number);
    mantissa.contains('0') && mantissa.bytes().all(|b| matches!(b, b'0' | b'-' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::is_empty_encoding;

    #[test]
    fn empty_values() {
        for encoded in ["null", "false", "\"\"", "[]", "{}", "0", "-0", "0.0", "0e10"] {
            assert!(is_empty_encoding(encoded), "{encoded}");
        }
    }

    #[test]
    fn non_empty_values() {
        for encoded in ["true", "\" \"", "[0]", "{\"a\":1}", "1", "0.5", "-10", "100e0", "\"0\""] {
            assert!(!is_empty_encoding(encoded), "{encoded}");
        }
    }
}
