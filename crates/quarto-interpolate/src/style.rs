/*
 * style.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Delimiter styles.
//!
//! A [`Style`] names the four characters that spell a placeholder in one
//! template dialect: the start character, the opening and closing brackets,
//! and the escape character. The default style reads `#{name}` and escapes
//! with a backtick.

use crate::error::{FormatError, FormatResult};
use serde::{Deserialize, Serialize};

/// The four delimiter characters of a template dialect.
///
/// Styles are validated on construction (and on deserialization), so every
/// `Style` value can be scanned without ambiguity:
///
/// - the escape character differs from the start, open, and close characters;
/// - the close character is not itself a valid path character.
///
/// `open == close` is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StyleFields")]
pub struct Style {
    start: char,
    open: char,
    close: char,
    escape: char,
}

impl Style {
    /// `#{name}`, escaped with `` ` ``.
    pub const DEFAULT: Style = Style {
        start: '#',
        open: '{',
        close: '}',
        escape: '`',
    };

    /// `${name}`, escaped with `\`.
    pub const DOLLAR: Style = Style {
        start: '$',
        open: '{',
        close: '}',
        escape: '\\',
    };

    /// Create a style, rejecting delimiter combinations that lex ambiguously.
    pub fn new(start: char, open: char, close: char, escape: char) -> FormatResult<Self> {
        for (role, c) in [("start", start), ("open", open), ("close", close)] {
            if c == escape {
                return Err(FormatError::InvalidStyle {
                    message: format!("escape character '{escape}' is also the {role} character"),
                });
            }
        }
        if is_path_char(close) {
            return Err(FormatError::InvalidStyle {
                message: format!("close character '{close}' is a valid parameter name character"),
            });
        }
        Ok(Style {
            start,
            open,
            close,
            escape,
        })
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn open(&self) -> char {
        self.open
    }

    pub fn close(&self) -> char {
        self.close
    }

    pub fn escape(&self) -> char {
        self.escape
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::DEFAULT
    }
}

/// Characters allowed inside a placeholder path.
pub(crate) fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

/// Unvalidated form used for deserialization; missing fields take the
/// default style's characters.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct StyleFields {
    start: char,
    open: char,
    close: char,
    escape: char,
}

impl Default for StyleFields {
    fn default() -> Self {
        let Style {
            start,
            open,
            close,
            escape,
        } = Style::DEFAULT;
        StyleFields {
            start,
            open,
            close,
            escape,
        }
    }
}

impl TryFrom<StyleFields> for Style {
    type Error = FormatError;

    fn try_from(fields: StyleFields) -> FormatResult<Self> {
        Style::new(fields.start, fields.open, fields.close, fields.escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = Style::default();
        assert_eq!(style.start(), '#');
        assert_eq!(style.open(), '{');
        assert_eq!(style.close(), '}');
        assert_eq!(style.escape(), '`');
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in [Style::DEFAULT, Style::DOLLAR] {
            let rebuilt = Style::new(
                preset.start(),
                preset.open(),
                preset.close(),
                preset.escape(),
            )
            .unwrap();
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn test_open_equal_close_allowed() {
        assert!(Style::new('%', '|', '|', '!').is_ok());
    }

    #[test]
    fn test_escape_collision_rejected() {
        assert!(matches!(
            Style::new('#', '{', '}', '#'),
            Err(FormatError::InvalidStyle { .. })
        ));
        assert!(matches!(
            Style::new('#', '{', '{', '{'),
            Err(FormatError::InvalidStyle { .. })
        ));
        assert!(matches!(
            Style::new('#', '{', '}', '}'),
            Err(FormatError::InvalidStyle { .. })
        ));
    }

    #[test]
    fn test_close_path_char_rejected() {
        assert!(Style::new('#', '{', 'x', '`').is_err());
        assert!(Style::new('#', '{', '.', '`').is_err());
        assert!(Style::new('#', '{', '7', '`').is_err());
    }

    #[test]
    fn test_deserialize_partial_fields() {
        let style: Style = serde_json::from_str(r#"{"start": "@"}"#).unwrap();
        assert_eq!(style, Style::new('@', '{', '}', '`').unwrap());
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<Style, _> = serde_json::from_str(r#"{"escape": "{"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid style"));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let style = Style::new('@', '^', '$', '!').unwrap();
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"start":"@","open":"^","close":"$","escape":"!"}"#);
        let back: Style = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }
}
