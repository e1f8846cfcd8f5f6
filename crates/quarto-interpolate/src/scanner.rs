/*
 * scanner.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder scanner.
//!
//! The scanner walks a template one character at a time and classifies each
//! character with a [`ParseState`]. Given the template
//!
//! ```text
//! Address: #{address.line1}, `#{literal}
//! ```
//!
//! - `Address: ` and `, ` are [`ParseState::FreeText`]
//! - `#` is [`ParseState::ParamStart`] (the `{` after it is skipped)
//! - `address.line1` is [`ParseState::Param`]
//! - `}` is [`ParseState::ParamEnd`]
//! - `` ` `` is [`ParseState::Escape`]; the `#` after it is free text
//!
//! Free text and completed placeholders are reported to a callback as
//! [`Event`]s.

use crate::error::{FormatError, FormatResult};
use crate::style::{Style, is_path_char};

/// Classification of the character at the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Outside any placeholder.
    FreeText,
    /// On the start character of a placeholder.
    ParamStart,
    /// Inside the brackets of a placeholder.
    Param,
    /// On the close character of a placeholder.
    ParamEnd,
    /// On an escape character.
    Escape,
}

/// Output of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'s> {
    /// A character to copy to the output verbatim.
    Text(char),
    /// A complete placeholder. `index` is the character position of its
    /// start character.
    Param { path: &'s str, index: usize },
}

/// Scanner over one template in one style.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'t> {
    template: &'t str,
    style: Style,
}

impl<'t> Scanner<'t> {
    pub fn new(template: &'t str, style: Style) -> Self {
        Scanner { template, style }
    }

    /// Run the state machine over the whole template, calling `on_event` for
    /// every free-text character and every completed placeholder.
    ///
    /// Errors returned by `on_event` stop the scan and are propagated.
    pub fn scan<F>(&self, mut on_event: F) -> FormatResult<()>
    where
        F: FnMut(Event<'_>) -> FormatResult<()>,
    {
        let mut state = ParseState::FreeText;
        let mut path = String::with_capacity(16);
        let mut param_index = 0;
        let mut chars = self.template.chars().enumerate().peekable();

        while let Some((index, c)) = chars.next() {
            let next = chars.peek().map(|&(_, n)| n);
            state = self.next_state(state, c, next);
            match state {
                ParseState::FreeText => on_event(Event::Text(c))?,
                ParseState::ParamStart => {
                    // Skip the open bracket.
                    chars.next();
                    param_index = index;
                }
                ParseState::Param => {
                    if !is_path_char(c) {
                        return Err(FormatError::InvalidParameterCharacter {
                            character: c,
                            index,
                        });
                    }
                    path.push(c);
                }
                ParseState::ParamEnd => {
                    on_event(Event::Param {
                        path: &path,
                        index: param_index,
                    })?;
                    path.clear();
                }
                ParseState::Escape => {}
            }
        }

        match state {
            ParseState::ParamStart | ParseState::Param => Err(FormatError::UnterminatedParameter {
                index: param_index,
                path,
            }),
            _ => Ok(()),
        }
    }

    fn next_state(&self, current: ParseState, c: char, next: Option<char>) -> ParseState {
        match current {
            ParseState::FreeText | ParseState::ParamEnd => self.from_free_text(c, next),
            ParseState::ParamStart | ParseState::Param => {
                if c == self.style.close() {
                    ParseState::ParamEnd
                } else {
                    ParseState::Param
                }
            }
            ParseState::Escape => ParseState::FreeText,
        }
    }

    fn from_free_text(&self, c: char, next: Option<char>) -> ParseState {
        if c == self.style.escape() {
            ParseState::Escape
        } else if c == self.style.start() && next == Some(self.style.open()) {
            ParseState::ParamStart
        } else {
            ParseState::FreeText
        }
    }

    /// The classification of every character, in order. Skipped open
    /// brackets are reported as [`ParseState::ParamStart`].
    ///
    /// Paths are not validated here.
    pub fn states(&self) -> Vec<ParseState> {
        let mut states = Vec::with_capacity(self.template.len());
        let mut state = ParseState::FreeText;
        let mut chars = self.template.chars().peekable();
        while let Some(c) = chars.next() {
            state = self.next_state(state, c, chars.peek().copied());
            states.push(state);
            if state == ParseState::ParamStart && chars.next().is_some() {
                states.push(ParseState::ParamStart);
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Collect free text, with placeholders written as `<path@index>`.
    fn scan(template: &str, style: Style) -> FormatResult<String> {
        let mut out = String::new();
        Scanner::new(template, style).scan(|event| {
            match event {
                Event::Text(c) => out.push(c),
                Event::Param { path, index } => out.push_str(&format!("<{path}@{index}>")),
            }
            Ok(())
        })?;
        Ok(out)
    }

    fn scan_default(template: &str) -> FormatResult<String> {
        scan(template, Style::default())
    }

    #[test]
    fn test_free_text() {
        assert_eq!(scan_default("plain text").unwrap(), "plain text");
        assert_eq!(scan_default("").unwrap(), "");
        assert_eq!(scan_default("# { } #x {y}").unwrap(), "# { } #x {y}");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            scan_default("#{int3}-#{a.b}").unwrap(),
            "<int3@0>-<a.b@8>"
        );
        assert_eq!(scan_default("#{}").unwrap(), "<@0>");
        assert_eq!(scan_default("#{a}#{b}").unwrap(), "<a@0><b@4>");
    }

    #[test]
    fn test_start_at_end() {
        assert_eq!(scan_default("ends with #").unwrap(), "ends with #");
    }

    #[test]
    fn test_escape() {
        assert_eq!(scan_default("`#{q},#{q}").unwrap(), "#{q},<q@6>");
        assert_eq!(scan_default("``#{q}").unwrap(), "`<q@2>");
        assert_eq!(scan_default("#{q}`").unwrap(), "<q@0>");
        assert_eq!(scan_default("`a").unwrap(), "a");
    }

    #[test]
    fn test_escape_after_param() {
        assert_eq!(scan_default("#{a}`#{b}").unwrap(), "<a@0>#{b}");
    }

    #[test]
    fn test_invalid_character() {
        let err = scan_default("#{a b}").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidParameterCharacter {
                character: ' ',
                index: 3
            }
        ));
    }

    #[test]
    fn test_nested_placeholder_rejected() {
        let err = scan_default("#{#{}} #{a}").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidParameterCharacter {
                character: '#',
                index: 2
            }
        ));
    }

    #[test]
    fn test_escape_in_param_rejected() {
        let err = scan_default("#{`q}").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidParameterCharacter { character: '`', .. }
        ));
    }

    #[test]
    fn test_index_counts_characters() {
        let err = scan_default("é#{a-b}").unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidParameterCharacter {
                character: '-',
                index: 4
            }
        ));
    }

    #[test]
    fn test_unterminated() {
        let err = scan_default("abc #{name").unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnterminatedParameter { index: 4, ref path } if path == "name"
        ));

        let err = scan_default("#{").unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnterminatedParameter { index: 0, ref path } if path.is_empty()
        ));
    }

    #[test]
    fn test_custom_style() {
        let style = Style::new('@', '^', '$', '!').unwrap();
        assert_eq!(scan("@^a$ !@^b$", style).unwrap(), "<a@0> @^b$");
    }

    #[test]
    fn test_open_equals_close() {
        let style = Style::new('%', '|', '|', '!').unwrap();
        assert_eq!(scan("%|a| and %||", style).unwrap(), "<a@0> and <@9>");
    }

    #[test]
    fn test_start_equals_open() {
        let style = Style::new('{', '{', '}', '\\').unwrap();
        assert_eq!(scan("{{x}} \\{{y}", style).unwrap(), "<x@0>} {{y}");
    }

    #[test]
    fn test_callback_error_stops_scan() {
        let mut seen = 0;
        let result = Scanner::new("#{a}#{b}", Style::default()).scan(|event| {
            if let Event::Param { .. } = event {
                seen += 1;
                return Err(FormatError::InvalidPositionalIndex {
                    index: 0,
                    available: 0,
                });
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_states() {
        use ParseState::*;
        let states = Scanner::new("a#{b}`c", Style::default()).states();
        assert_eq!(
            states,
            vec![FreeText, ParamStart, ParamStart, Param, ParamEnd, Escape, FreeText]
        );
    }
}
