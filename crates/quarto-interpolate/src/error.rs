/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for argument binding and template rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while binding arguments or rendering a template.
///
/// Failures inside a member chain (missing accessor, accessor that could not
/// produce a value) are not errors: they resolve to `null`.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A character inside a placeholder is not an ASCII letter, digit, or `.`.
    ///
    /// `index` is a character position in the template.
    #[error("Invalid character '{character}' used in param name (affected index: {index})")]
    InvalidParameterCharacter { character: char, index: usize },

    /// A numeric path head does not name a supplied positional argument.
    ///
    /// Numeric heads are parsed as `i32`; larger numbers are names.
    #[error("Invalid positional argument: {index} ({available} positional arguments supplied)")]
    InvalidPositionalIndex { index: i32, available: usize },

    /// A name was bound twice.
    #[error("Argument '{name}' is already defined in the arguments list")]
    DuplicateArgument { name: String },

    /// A flat name/value list had an odd number of entries.
    #[error("Invalid number of arguments: {count}. Every argument needs to have a pair")]
    InvalidArgumentCount { count: usize },

    /// A flat name/value list had a non-text value in a name slot.
    #[error("Invalid argument name: expected text, found {found}")]
    InvalidArgumentName { found: String },

    /// The template ended inside a placeholder.
    #[error("Unterminated parameter '{path}' starting at index {index}")]
    UnterminatedParameter { index: usize, path: String },

    /// A style whose delimiters cannot be lexed unambiguously.
    #[error("Invalid style: {message}")]
    InvalidStyle { message: String },

    /// A bound object's `Display` impl failed while rendering.
    #[error("Value could not be rendered: {0}")]
    ValueDisplay(#[from] std::fmt::Error),

    /// The template source could not be read.
    #[error("Error accessing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FormatError::InvalidParameterCharacter {
            character: ' ',
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid character ' ' used in param name (affected index: 3)"
        );

        let err = FormatError::DuplicateArgument {
            name: "a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Argument 'a' is already defined in the arguments list"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        use std::error::Error as _;

        let err = FormatError::Io {
            path: PathBuf::from("missing.template"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("Error accessing missing.template"));
        assert!(err.source().is_some());
    }
}
