//! Key paths from the schema root and the per-invocation path context.

use std::fmt;

use eyre::Result;
use serde::{Serialize, Serializer};

use crate::Error;

/// A key chain from the schema root, e.g. `dialog.ok`.
///
/// Segments are kept separately so keys that themselves contain a `.` still
/// resolve when the path is looked up in a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaPath(Vec<String>);

impl SchemaPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The final key of the path, or `""` for the root.
    pub fn key(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for SchemaPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for SchemaPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The stack of keys leading to the record currently being walked.
///
/// Owned by one build or unify invocation and threaded explicitly through
/// the recursion. Every descent goes through [`PathStack::scoped`], which
/// checks the stack is balanced on the way out.
#[derive(Debug, Default)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of `key` inside the current record.
    pub fn child(&self, key: &str) -> SchemaPath {
        self.segments
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(key))
            .collect()
    }

    /// Run `f` one level deeper, under `key`.
    ///
    /// # Errors
    ///
    /// Propagates errors from `f`, and returns
    /// [`Error::PathContextMismatch`] if `f` left the stack unbalanced.
    pub fn scoped<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.segments.push(key.to_string());
        let depth = self.segments.len();
        let out = f(self)?;
        if self.segments.len() != depth {
            return Err(Error::PathContextMismatch {
                expected: key.to_string(),
                actual: self.segments.last().cloned().unwrap_or_default(),
            }
            .into());
        }
        match self.segments.pop() {
            Some(popped) if popped == key => Ok(out),
            popped => Err(Error::PathContextMismatch {
                expected: key.to_string(),
                actual: popped.unwrap_or_default(),
            }
            .into()),
        }
    }

    /// Check the stack is back at the root after a full walk.
    pub fn finish(self) -> Result<()> {
        match self.segments.last() {
            None => Ok(()),
            Some(last) => Err(Error::PathContextMismatch {
                expected: String::new(),
                actual: last.clone(),
            }
            .into()),
        }
    }
}
