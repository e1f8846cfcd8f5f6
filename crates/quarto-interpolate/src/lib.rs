/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Lightweight string interpolation for Quarto.
//!
//! This crate substitutes `#{...}` placeholders in a template string with
//! bound values. It is meant for log lines, error messages, and small
//! reports, and has no loops, conditionals, or includes. It supports:
//!
//! - Named arguments: `#{name}`
//! - Positional arguments: `#{0}`, `#{1}`
//! - Member chains: `#{person.address.line1}`, with a `getLine1` fallback
//! - Sequences rendered as `[a, b, c]`
//! - Escaping: `` `#{x} `` renders the literal `#{x}`
//! - Custom delimiters through [`Style`] (e.g. `${name}` with `\` escapes)
//!
//! Unbound names and broken member chains render as `null` rather than
//! failing; malformed placeholders and missing positional arguments are
//! errors.
//!
//! # Example
//!
//! ```
//! use quarto_interpolate::{Formatter, Record};
//!
//! let person = Record::new().with("name", "Ada").with("age", 36);
//! let out = Formatter::new("#{p.name} is #{p.age}; tags: #{tags}")
//!     .bind("p", person)?
//!     .bind("tags", vec!["math", "engines"])?
//!     .render()?;
//! assert_eq!(out, "Ada is 36; tags: [math, engines]");
//! # Ok::<(), quarto_interpolate::FormatError>(())
//! ```

pub mod args;
pub mod error;
pub mod formatter;
pub mod path;
pub mod render;
pub mod resolver;
pub mod scanner;
pub mod style;
pub mod value;

// Re-export main types at crate root
pub use args::Arguments;
pub use error::{FormatError, FormatResult};
pub use formatter::{Formatter, render};
pub use path::{ParamPath, PathCursor};
pub use resolver::resolve;
pub use scanner::{Event, ParseState, Scanner};
pub use style::Style;
pub use value::{FieldAccessible, Record, Value};
