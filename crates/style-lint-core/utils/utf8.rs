//! Input decoding helpers for stylesheet text
//!
//! Stylesheets pasted or saved by editors may carry a UTF-8 byte order mark
//! or stray invalid bytes. Both are dealt with here before analysis so the
//! first selector and every line number stay the same as the user sees them.
//!
//! # Example
//!
//! ```rust
//! use style_lint_core::utils::strip_bom;
//!
//! let (stripped, had_bom) = strip_bom("\u{FEFF}a { color: red; }");
//! assert_eq!(stripped, "a { color: red; }");
//! assert!(had_bom);
//! ```

/// Strip a leading UTF-8 byte order mark
///
/// Returns the remaining text and whether a BOM was present.
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix('\u{FEFF}')
        .map_or((text, false), |stripped| (stripped, true))
}

/// Decode bytes as UTF-8, replacing invalid sequences
///
/// Returns the decoded text and the number of replacement characters that
/// were inserted (0 for valid input).
#[must_use]
pub fn recover_utf8(bytes: &[u8]) -> (String, usize) {
    match std::str::from_utf8(bytes) {
        Ok(s) => (s.to_string(), 0),
        Err(_) => {
            let recovered = String::from_utf8_lossy(bytes);
            let replacements = recovered.matches('\u{FFFD}').count();
            (recovered.into_owned(), replacements)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_bom_only_at_start() {
        assert_eq!(strip_bom("a {}"), ("a {}", false));
        assert_eq!(strip_bom("\u{FEFF}"), ("", true));
        assert_eq!(strip_bom("a\u{FEFF}"), ("a\u{FEFF}", false));
    }

    #[test]
    fn recover_valid_utf8() {
        let (text, replaced) = recover_utf8("body { color: #fff; }".as_bytes());
        assert_eq!(text, "body { color: #fff; }");
        assert_eq!(replaced, 0);
    }

    #[test]
    fn recover_invalid_utf8() {
        let (text, replaced) = recover_utf8(b"a { content: \xff\xfe; }");
        assert_eq!(replaced, 2);
        assert!(text.starts_with("a { content: "));
        assert!(text.ends_with("; }"));
    }
}
