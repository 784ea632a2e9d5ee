//! Input validation
//!
//! Flags characters that have no glyph. Rendering never depends on this; it
//! only feeds the warning shown to the user.

use crate::glyphs::GlyphDictionary;
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of checking text against the glyph dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// Whether any character would render as blank
    pub has_invalid_chars: bool,
    /// Unsupported characters, deduplicated and sorted
    pub invalid_chars: Vec<String>,
}

impl Validation {
    /// Advisory notice for the user, if anything was flagged
    pub fn warning_message(&self) -> Option<String> {
        if !self.has_invalid_chars {
            return None;
        }
        Some(format!(
            "Unsupported characters detected: {}. These will be replaced with spaces.",
            self.invalid_chars.join(", ")
        ))
    }
}

/// Check `text` for characters without a glyph.
///
/// Comparison is case-insensitive. Newlines are always accepted since the
/// renderer treats them as line breaks.
pub fn validate(text: &str) -> Validation {
    if text.trim().is_empty() {
        return Validation::default();
    }

    let dictionary = GlyphDictionary::global();
    let invalid: BTreeSet<char> = text
        .to_uppercase()
        .chars()
        .filter(|ch| *ch != '\n' && !dictionary.contains(*ch))
        .collect();

    Validation {
        has_invalid_chars: !invalid.is_empty(),
        invalid_chars: invalid.into_iter().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_supported_text() {
        let result = validate("HELLO!");
        assert!(!result.has_invalid_chars);
        assert!(result.invalid_chars.is_empty());
        assert_eq!(result.warning_message(), None);
    }

    #[test]
    fn test_invalid_chars_sorted() {
        let result = validate("HI~^");
        assert!(result.has_invalid_chars);
        assert_eq!(result.invalid_chars, vec!["^", "~"]);
    }

    #[test]
    fn test_deduplicated() {
        let result = validate("a~b~c~");
        assert_eq!(result.invalid_chars, vec!["~"]);
    }

    #[test]
    fn test_lowercase_is_supported() {
        assert!(!validate("hello world 123").has_invalid_chars);
    }

    #[test]
    fn test_newlines_are_valid() {
        assert!(!validate("A\nB\n\nC").has_invalid_chars);
    }

    #[test]
    fn test_blank_text() {
        assert_eq!(validate(""), Validation::default());
        assert_eq!(validate(" \n\t "), Validation::default());
    }

    #[test]
    fn test_carriage_return_is_flagged() {
        assert_eq!(validate("A\r\nB").invalid_chars, vec!["\r"]);
    }

    #[test]
    fn test_warning_message() {
        let message = validate("HI~^").warning_message().unwrap();
        assert_eq!(
            message,
            "Unsupported characters detected: ^, ~. These will be replaced with spaces."
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(validate("HI~")).unwrap();
        assert_eq!(json["hasInvalidChars"], true);
        assert_eq!(json["invalidChars"][0], "~");
    }
}
