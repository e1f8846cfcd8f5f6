/*
 * args.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Argument store.
//!
//! Named arguments keep their insertion order. A name can be bound only once:
//! every bind path (single, bulk, flat pairs) rejects a duplicate with
//! [`FormatError::DuplicateArgument`].

use crate::error::{FormatError, FormatResult};
use crate::value::Value;
use indexmap::IndexMap;

/// Named and positional arguments for one template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    named: IndexMap<String, Value>,
    positional: Vec<Value>,
}

impl Arguments {
    /// Create an empty argument store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding only positional arguments.
    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Arguments {
            named: IndexMap::new(),
            positional: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Bind `name` to `value`.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> FormatResult<()> {
        let name = name.into();
        if self.named.contains_key(&name) {
            return Err(FormatError::DuplicateArgument { name });
        }
        self.named.insert(name, value.into());
        Ok(())
    }

    /// Bind every pair in order. Stops at the first duplicate; pairs before
    /// it stay bound.
    pub fn bind_all<I, K, V>(&mut self, pairs: I) -> FormatResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in pairs {
            self.bind(name, value)?;
        }
        Ok(())
    }

    /// Bind a flat `[name0, value0, name1, value1, ...]` list.
    ///
    /// Every name slot must hold a `Text` value.
    pub fn bind_pairs(&mut self, values: Vec<Value>) -> FormatResult<()> {
        if values.len() % 2 == 1 {
            return Err(FormatError::InvalidArgumentCount {
                count: values.len(),
            });
        }

        let mut iter = values.into_iter();
        while let (Some(name), Some(value)) = (iter.next(), iter.next()) {
            match name {
                Value::Text(name) => self.bind(name, value)?,
                other => {
                    return Err(FormatError::InvalidArgumentName {
                        found: other.kind().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Append a positional argument.
    pub fn push_positional(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Look up a named argument.
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Look up a positional argument.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Named arguments in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}
