/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Textual rendering of resolved values.

use crate::error::FormatResult;
use crate::value::Value;
use std::fmt::{self, Write};

/// Write the textual form of `value` to `out`.
///
/// - `Null` renders as `null`
/// - sequences render as `[e0, e1, ...]` (`[]` when empty), nested
///   sequences the same way
/// - everything else uses its natural `Display` form
pub fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Int(n) => write!(out, "{n}"),
        Value::Float(n) => write!(out, "{n}"),
        Value::Text(s) => out.write_str(s),
        Value::Bool(b) => write!(out, "{b}"),
        Value::Sequence(items) => write_sequence(out, items),
        Value::Object(object) => write!(out, "{object}"),
    }
}

fn write_sequence<W: Write>(out: &mut W, items: &[Value]) -> fmt::Result {
    out.write_char('[')?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_value(out, item)?;
    }
    out.write_char(']')
}

/// Append the textual form of `value` to a `String`.
///
/// Fails only when an object's `Display` impl reports an error.
pub fn render_into(out: &mut String, value: &Value) -> FormatResult<()> {
    write_value(out, value)?;
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;
    use pretty_assertions::assert_eq;

    fn render(value: &Value) -> String {
        let mut out = String::new();
        render_into(&mut out, value).unwrap();
        out
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null), "null");
        assert_eq!(render(&Value::Int(-42)), "-42");
        assert_eq!(render(&Value::Float(1.5)), "1.5");
        assert_eq!(render(&Value::from("text")), "text");
        assert_eq!(render(&Value::Bool(false)), "false");
    }

    #[test]
    fn test_sequence() {
        assert_eq!(render(&Value::from(vec![1, 3, 4])), "[1, 3, 4]");
        assert_eq!(render(&Value::Sequence(vec![])), "[]");
        assert_eq!(render(&Value::from(vec!["only"])), "[only]");
    }

    #[test]
    fn test_nested_sequence() {
        let value = Value::Sequence(vec![
            Value::from(vec![1, 2]),
            Value::Sequence(vec![]),
            Value::Null,
        ]);
        assert_eq!(render(&value), "[[1, 2], [], null]");
    }

    #[test]
    fn test_object_uses_display() {
        let value = Value::from(Record::labeled("Person(A)"));
        assert_eq!(render(&value), "Person(A)");
    }

    #[derive(Debug)]
    struct BrokenDisplay;

    impl fmt::Display for BrokenDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    impl crate::value::FieldAccessible for BrokenDisplay {
        fn get(&self, _name: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn test_object_display_error() {
        let mut out = String::new();
        let err = render_into(&mut out, &Value::object(BrokenDisplay)).unwrap_err();
        assert!(matches!(err, crate::error::FormatError::ValueDisplay(_)));

        let seq = Value::Sequence(vec![Value::Int(1), Value::object(BrokenDisplay)]);
        assert!(render_into(&mut String::new(), &seq).is_err());
    }

    #[test]
    fn test_render_appends() {
        let mut out = String::from("x=");
        render_into(&mut out, &Value::Int(1)).unwrap();
        assert_eq!(out, "x=1");
    }
}
