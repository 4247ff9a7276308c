//! Header line composition.
//!
//! Turns a single key/value pair into the one-line form the native list
//! expects, applying the single mandatory byte-level fix-up: embedded nul
//! bytes are replaced with a visible escape, because the native layer treats
//! list entries as nul-terminated strings and an embedded nul would silently
//! truncate the entry.

use std::borrow::Cow;

/// Replaces every nul byte in `text` with the two-character escape `\0`.
///
/// Borrows the input unchanged when it contains no nul byte, which is the
/// common path for well-formed header text.
pub fn escape_zero_byte(text: &str) -> Cow<'_, str> {
    if text.contains('\0') { Cow::Owned(text.replace('\0', "\\0")) } else { Cow::Borrowed(text) }
}

/// Composes a native list entry from a header name and value.
///
/// Produces `"<key>: <value>"` with nul bytes escaped. No other escaping,
/// validation, or normalization is performed; callers are responsible for
/// supplying header-safe text.
pub fn compose_line(key: &str, value: &str) -> String {
    let line = format!("{key}: {value}");
    match escape_zero_byte(&line) {
        Cow::Borrowed(_) => line,
        Cow::Owned(escaped) => escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_key_and_value() {
        assert_eq!(compose_line("User-Agent", "easy-headers/0.1"), "User-Agent: easy-headers/0.1");
    }

    #[test]
    fn escapes_nul_in_value() {
        assert_eq!(compose_line("X-Bin", "a\0b"), "X-Bin: a\\0b");
    }

    #[test]
    fn escapes_nul_in_key() {
        assert_eq!(compose_line("X\0Key", "v"), "X\\0Key: v");
    }

    #[test]
    fn escaped_line_is_never_shorter_than_the_truncated_form() {
        // An unescaped nul would cut the entry short at the nul position.
        let line = compose_line("X", "a\0b");
        assert!(line.len() > "X: a".len());
        assert_eq!(line, "X: a\\0b");
    }

    #[test]
    fn borrows_when_no_nul_present() {
        assert!(matches!(escape_zero_byte("plain text"), Cow::Borrowed(_)));
        assert!(matches!(escape_zero_byte("with\0nul"), Cow::Owned(_)));
    }

    #[test]
    fn empty_value_keeps_the_separator() {
        assert_eq!(compose_line("Accept", ""), "Accept: ");
    }
}
