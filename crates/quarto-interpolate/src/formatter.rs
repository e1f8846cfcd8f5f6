/*
 * formatter.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The formatting facade.
//!
//! A [`Formatter`] owns a template, a [`Style`], and its [`Arguments`], and
//! renders them in a single pass: the scanner copies free text to the
//! output, and each completed placeholder is resolved and rendered in place.

use crate::args::Arguments;
use crate::error::{FormatError, FormatResult};
use crate::path::ParamPath;
use crate::render::render_into;
use crate::resolver::resolve;
use crate::scanner::{Event, Scanner};
use crate::style::Style;
use crate::value::Value;
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::path::Path;

/// Render `template` once against `args`.
pub fn render(template: &str, style: Style, args: &Arguments) -> FormatResult<String> {
    tracing::debug!(
        len = template.len(),
        named = args.names().count(),
        positional = args.positional_len(),
        "Rendering template"
    );

    let mut output = String::with_capacity(template.len());
    let mut placeholders = 0usize;

    Scanner::new(template, style).scan(|event| {
        match event {
            Event::Text(c) => output.push(c),
            Event::Param { path, index } => {
                let value = resolve(&ParamPath::parse(path), args)?;
                render_into(&mut output, &value)?;
                tracing::trace!(path, index, kind = value.kind(), "Resolved placeholder");
                placeholders += 1;
            }
        }
        Ok(())
    })?;

    tracing::debug!(placeholders, len = output.len(), "Rendered template");
    Ok(output)
}

/// A template together with its style and arguments.
///
/// Binding consumes and returns the formatter, so arguments are fixed before
/// [`Formatter::render`] is called:
///
/// ```
/// use quarto_interpolate::Formatter;
///
/// let out = Formatter::new("#{greeting}, #{0}!")
///     .push_positional("World")
///     .bind("greeting", "Hello")?
///     .render()?;
/// assert_eq!(out, "Hello, World!");
/// # Ok::<(), quarto_interpolate::FormatError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Formatter<'t> {
    template: Cow<'t, str>,
    style: Style,
    args: Arguments,
}

impl<'t> Formatter<'t> {
    /// A formatter with no arguments and the default style.
    pub fn new(template: impl Into<Cow<'t, str>>) -> Self {
        Formatter {
            template: template.into(),
            style: Style::default(),
            args: Arguments::new(),
        }
    }

    /// A formatter with positional arguments `#{0}`, `#{1}`, ...
    pub fn with_positional<I, V>(template: impl Into<Cow<'t, str>>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Formatter {
            args: Arguments::from_positional(values),
            ..Formatter::new(template)
        }
    }

    /// A formatter with named arguments.
    pub fn with_named<I, K, V>(template: impl Into<Cow<'t, str>>, pairs: I) -> FormatResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Formatter::new(template).bind_all(pairs)
    }

    /// Replace the delimiter style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Bind a named argument. Fails if `name` is already bound.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> FormatResult<Self> {
        self.args.bind(name, value)?;
        Ok(self)
    }

    /// Bind several named arguments.
    pub fn bind_all<I, K, V>(mut self, pairs: I) -> FormatResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.args.bind_all(pairs)?;
        Ok(self)
    }

    /// Bind a flat `[name0, value0, name1, value1, ...]` list.
    pub fn bind_pairs(mut self, values: Vec<Value>) -> FormatResult<Self> {
        self.args.bind_pairs(values)?;
        Ok(self)
    }

    /// Append a positional argument.
    pub fn push_positional(mut self, value: impl Into<Value>) -> Self {
        self.args.push_positional(value);
        self
    }

    /// Produce the substituted string.
    pub fn render(&self) -> FormatResult<String> {
        render(&self.template, self.style, &self.args)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn arguments(&self) -> &Arguments {
        &self.args
    }
}

impl Formatter<'static> {
    /// Read a UTF-8 template from `path`.
    pub fn from_file(path: impl AsRef<Path>) -> FormatResult<Self> {
        Formatter::from_file_with_encoding(path, UTF_8)
    }

    /// Read a template from `path`, decoding it with `encoding`.
    ///
    /// A byte order mark is not interpreted; bytes that are malformed in
    /// `encoding` are an [`FormatError::Io`] error with `InvalidData`.
    pub fn from_file_with_encoding(
        path: impl AsRef<Path>,
        encoding: &'static Encoding,
    ) -> FormatResult<Self> {
        Ok(Formatter::new(read_template(path.as_ref(), encoding)?))
    }

    /// Read a UTF-8 template from `path` and attach positional arguments.
    pub fn from_file_with_positional<I, V>(path: impl AsRef<Path>, values: I) -> FormatResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Formatter::from_file_with_encoding_and_positional(path, UTF_8, values)
    }

    /// Read a template from `path` in `encoding` and attach positional
    /// arguments.
    pub fn from_file_with_encoding_and_positional<I, V>(
        path: impl AsRef<Path>,
        encoding: &'static Encoding,
        values: I,
    ) -> FormatResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Ok(Formatter::with_positional(
            read_template(path.as_ref(), encoding)?,
            values,
        ))
    }

    /// Read a UTF-8 template from `path` and bind named arguments.
    pub fn from_file_with_named<I, K, V>(path: impl AsRef<Path>, pairs: I) -> FormatResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Formatter::from_file_with_encoding_and_named(path, UTF_8, pairs)
    }

    /// Read a template from `path` in `encoding` and bind named arguments.
    pub fn from_file_with_encoding_and_named<I, K, V>(
        path: impl AsRef<Path>,
        encoding: &'static Encoding,
        pairs: I,
    ) -> FormatResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Formatter::with_named(read_template(path.as_ref(), encoding)?, pairs)
    }
}

fn read_template(path: &Path, encoding: &'static Encoding) -> FormatResult<String> {
    tracing::debug!(path = %path.display(), encoding = encoding.name(), "Reading template");
    let io_error = |source: std::io::Error| FormatError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(io_error)?;
    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .map(Cow::into_owned)
        .ok_or_else(|| {
            io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("template is not valid {}", encoding.name()),
            ))
        })
}
