/*
 * path.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Placeholder paths.
//!
//! A path such as `address.line1` is split once into an immutable list of
//! segments. Resolution walks it with a [`PathCursor`] instead of consuming
//! a shared buffer.

/// The segments of a placeholder path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamPath<'p> {
    segments: Vec<&'p str>,
}

impl<'p> ParamPath<'p> {
    /// Split `raw` on `.`.
    ///
    /// The head segment is always present (possibly empty). A trailing `.`
    /// adds no segment, so `a.` and `a` are the same path.
    pub fn parse(raw: &'p str) -> Self {
        let mut segments: Vec<&'p str> = raw.split('.').collect();
        if segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }
        ParamPath { segments }
    }

    /// The first segment: a positional index or an argument name.
    pub fn head(&self) -> &'p str {
        self.segments[0]
    }

    /// Segments applied as member accesses after the head.
    pub fn members(&self) -> &[&'p str] {
        &self.segments[1..]
    }

    pub fn segments(&self) -> &[&'p str] {
        &self.segments
    }

    /// A cursor positioned on the first member segment.
    pub fn cursor(&self) -> PathCursor<'_, 'p> {
        PathCursor {
            segments: self.members(),
            position: 0,
        }
    }
}

/// Index-based cursor over a path's member segments.
#[derive(Debug, Clone)]
pub struct PathCursor<'a, 'p> {
    segments: &'a [&'p str],
    position: usize,
}

impl<'p> PathCursor<'_, 'p> {
    /// Take the next segment, if any.
    pub fn next_segment(&mut self) -> Option<&'p str> {
        let segment = self.segments.get(self.position).copied()?;
        self.position += 1;
        Some(segment)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.segments.len()
    }

    /// Segments not yet taken.
    pub fn remaining(&self) -> &[&'p str] {
        &self.segments[self.position.min(self.segments.len())..]
    }
}
