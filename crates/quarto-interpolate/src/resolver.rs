/*
 * resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Path resolution.
//!
//! The head segment of a path picks the root value: a segment that parses as
//! an integer is a positional index, anything else is a name. Remaining
//! segments are member accesses on the result. Member chains fail soft: a
//! missing member, a null intermediate, or a value without members resolves
//! the whole chain to [`Value::Null`].

use crate::args::Arguments;
use crate::error::{FormatError, FormatResult};
use crate::path::{ParamPath, PathCursor};
use crate::value::{FieldAccessible, Value};
use std::borrow::Cow;

/// Resolve `path` against `args`.
///
/// Values stored in `args` are borrowed; values produced by member access
/// are owned.
pub fn resolve<'a>(path: &ParamPath<'_>, args: &'a Arguments) -> FormatResult<Cow<'a, Value>> {
    let root = resolve_root(path.head(), args)?;
    Ok(walk_members(root, &mut path.cursor()))
}

/// Look up the root value named by the head segment.
///
/// Numeric heads are `i32` indices; a number outside `i32` is looked up as
/// a name. Missing positional arguments are an error; missing names resolve
/// to null.
fn resolve_root<'a>(head: &str, args: &'a Arguments) -> FormatResult<Cow<'a, Value>> {
    if let Ok(index) = head.parse::<i32>() {
        return usize::try_from(index)
            .ok()
            .and_then(|position| args.positional(position))
            .map(Cow::Borrowed)
            .ok_or_else(|| FormatError::InvalidPositionalIndex {
                index,
                available: args.positional_len(),
            });
    }

    Ok(match args.named(head) {
        Some(value) => Cow::Borrowed(value),
        None => {
            tracing::trace!(name = head, "unbound argument resolves to null");
            Cow::Owned(Value::Null)
        }
    })
}

fn walk_members<'a>(mut current: Cow<'a, Value>, cursor: &mut PathCursor<'_, '_>) -> Cow<'a, Value> {
    while let Some(segment) = cursor.next_segment() {
        let next = match current.as_ref() {
            Value::Object(object) => member(object.as_ref(), segment),
            Value::Null => None,
            other => {
                tracing::trace!(
                    segment,
                    kind = other.kind(),
                    "member access on a value without members"
                );
                None
            }
        };

        match next {
            Some(value) => current = Cow::Owned(value),
            None => {
                tracing::trace!(
                    segment,
                    remaining = ?cursor.remaining(),
                    "member chain resolves to null"
                );
                return Cow::Owned(Value::Null);
            }
        }
    }
    current
}

/// Look up `segment` on `object`, falling back to the `getSegment` form.
pub fn member(object: &dyn FieldAccessible, segment: &str) -> Option<Value> {
    object
        .get(segment)
        .or_else(|| getter_name(segment).and_then(|getter| object.get(&getter)))
}

/// `name` → `getName`. Empty segments have no getter form.
pub fn getter_name(segment: &str) -> Option<String> {
    let mut chars = segment.chars();
    let first = chars.next()?;
    let mut getter = String::with_capacity(segment.len() + 3);
    getter.push_str("get");
    getter.extend(first.to_uppercase());
    getter.push_str(chars.as_str());
    Some(getter)
}
