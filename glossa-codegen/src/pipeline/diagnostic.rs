//! Structural diagnostics collected while building and unifying trees.
//!
//! Diagnostics are data: the build and unify phases record them and keep
//! going, and the pipeline fails once, after a complete pass, if any were
//! recorded. Each diagnostic is identified by its kind and path, so every
//! language hitting the same conflict lands in the same entry.

use std::fmt;

use glossa_ir::{CallTypeDescriptor, DescriptorKind, RawValue};
use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use super::SchemaPath;

/// The four kinds of structural disagreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A document leaf is neither a string, a number nor a mapping.
    UnexpectedValueType,
    /// A key exists in some languages but not in others.
    NotFoundKey,
    /// Languages disagree on String / Call / Record at a path.
    MismatchedKind,
    /// Two calls at a path have different parameter-name sets.
    MismatchedArguments,
}

impl DiagnosticKind {
    pub const ALL: [DiagnosticKind; 4] = [
        DiagnosticKind::UnexpectedValueType,
        DiagnosticKind::NotFoundKey,
        DiagnosticKind::MismatchedKind,
        DiagnosticKind::MismatchedArguments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedValueType => "unexpected-value-type",
            DiagnosticKind::NotFoundKey => "not-found-key",
            DiagnosticKind::MismatchedKind => "mismatched-kind",
            DiagnosticKind::MismatchedArguments => "mismatched-arguments",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a merge lacks a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingSide {
    /// The canonical schema (fixed by the first language) lacks the key;
    /// the payload names the languages that provide it.
    Canonical,
    /// The incoming language lacks a key the canonical schema has; the
    /// payload names the languages missing it.
    Incoming,
}

/// Kind-specific data of a diagnostic, accumulated across languages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Payload {
    UnexpectedValueType {
        /// Offending language → type name of the value it holds.
        found: IndexMap<String, String>,
    },
    NotFoundKey {
        side: MissingSide,
        languages: IndexSet<String>,
    },
    MismatchedKind {
        /// The kind in the canonical schema.
        expected: DescriptorKind,
        /// Offending language → the kind it holds.
        found: IndexMap<String, DescriptorKind>,
    },
    MismatchedArguments {
        /// Sorted parameter names in the canonical schema.
        expected: Vec<String>,
        /// Offending language → its sorted parameter names.
        found: IndexMap<String, Vec<String>>,
    },
}

/// One structural disagreement, identified by `(kind, path)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub path: SchemaPath,
    #[serde(flatten)]
    pub payload: Payload,
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self.payload {
            Payload::UnexpectedValueType { .. } => DiagnosticKind::UnexpectedValueType,
            Payload::NotFoundKey { .. } => DiagnosticKind::NotFoundKey,
            Payload::MismatchedKind { .. } => DiagnosticKind::MismatchedKind,
            Payload::MismatchedArguments { .. } => DiagnosticKind::MismatchedArguments,
        }
    }

    /// Names of the languages this diagnostic blames, in the order they were seen.
    pub fn languages(&self) -> Vec<&str> {
        match &self.payload {
            Payload::UnexpectedValueType { found } => found.keys().map(String::as_str).collect(),
            Payload::NotFoundKey { languages, .. } => {
                languages.iter().map(String::as_str).collect()
            }
            Payload::MismatchedKind { found, .. } => found.keys().map(String::as_str).collect(),
            Payload::MismatchedArguments { found, .. } => {
                found.keys().map(String::as_str).collect()
            }
        }
    }
}

/// Deduplicated diagnostics of one generation run, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: IndexMap<(DiagnosticKind, SchemaPath), Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.values()
    }

    pub fn get(&self, kind: DiagnosticKind, path: &SchemaPath) -> Option<&Diagnostic> {
        self.entries.get(&(kind, path.clone()))
    }

    /// Diagnostics of one kind, in first-seen order.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(move |((k, _), _)| *k == kind)
            .map(|(_, diagnostic)| diagnostic)
    }

    /// Record a document value the model does not support.
    pub fn unexpected_value_type(&mut self, path: SchemaPath, language: &str, value: &RawValue) {
        let payload = self.entry(DiagnosticKind::UnexpectedValueType, path, || {
            Payload::UnexpectedValueType {
                found: IndexMap::new(),
            }
        });
        if let Payload::UnexpectedValueType { found } = payload {
            found.insert(language.to_string(), value.type_name().to_string());
        }
    }

    /// Record a key that `language` provides or lacks, depending on `side`.
    pub fn not_found_key(&mut self, path: SchemaPath, side: MissingSide, language: &str) {
        let payload = self.entry(DiagnosticKind::NotFoundKey, path, || Payload::NotFoundKey {
            side,
            languages: IndexSet::new(),
        });
        if let Payload::NotFoundKey { languages, .. } = payload {
            languages.insert(language.to_string());
        }
    }

    /// Record that `language` holds a `found` node where the schema has `expected`.
    pub fn mismatched_kind(
        &mut self,
        path: SchemaPath,
        expected: DescriptorKind,
        found: DescriptorKind,
        language: &str,
    ) {
        let payload = self.entry(DiagnosticKind::MismatchedKind, path, || {
            Payload::MismatchedKind {
                expected,
                found: IndexMap::new(),
            }
        });
        if let Payload::MismatchedKind { found: map, .. } = payload {
            map.insert(language.to_string(), found);
        }
    }

    /// Record that `language` calls with different parameters than the schema.
    pub fn mismatched_arguments(
        &mut self,
        path: SchemaPath,
        expected: &CallTypeDescriptor,
        found: &CallTypeDescriptor,
        language: &str,
    ) {
        let payload = self.entry(DiagnosticKind::MismatchedArguments, path, || {
            Payload::MismatchedArguments {
                expected: param_list(expected),
                found: IndexMap::new(),
            }
        });
        if let Payload::MismatchedArguments { found: map, .. } = payload {
            map.insert(language.to_string(), param_list(found));
        }
    }

    fn entry(
        &mut self,
        kind: DiagnosticKind,
        path: SchemaPath,
        payload: impl FnOnce() -> Payload,
    ) -> &mut Payload {
        tracing::trace!(%kind, %path, "recording diagnostic");
        &mut self
            .entries
            .entry((kind, path.clone()))
            .or_insert_with(|| Diagnostic {
                path,
                payload: payload(),
            })
            .payload
    }
}

fn param_list(call: &CallTypeDescriptor) -> Vec<String> {
    call.param_names().into_iter().map(str::to_string).collect()
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = indexmap::map::Values<'a, (DiagnosticKind, SchemaPath), Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use glossa_ir::ArgSegment;

    use super::*;

    fn path(dotted: &str) -> SchemaPath {
        dotted.split('.').collect()
    }

    fn call(param: &str) -> CallTypeDescriptor {
        CallTypeDescriptor {
            body: vec![ArgSegment::literal("hi "), ArgSegment::param(param)],
        }
    }

    #[test]
    fn test_dedup_by_kind_and_path() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.mismatched_arguments(path("greet"), &call("a"), &call("b"), "zh");
        diagnostics.mismatched_arguments(path("greet"), &call("a"), &call("c"), "sp");

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics
            .get(DiagnosticKind::MismatchedArguments, &path("greet"))
            .unwrap();
        assert_eq!(diagnostic.languages(), vec!["zh", "sp"]);
    }

    #[test]
    fn test_same_path_different_kind_is_separate() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.not_found_key(path("dialog.ok"), MissingSide::Incoming, "zh");
        diagnostics.mismatched_kind(
            path("dialog.ok"),
            DescriptorKind::String,
            DescriptorKind::Call,
            "sp",
        );
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.of_kind(DiagnosticKind::NotFoundKey).count(), 1);
    }

    #[test]
    fn test_repeated_language_is_recorded_once() {
        let mut diagnostics = Diagnostics::new();
        for _ in 0..2 {
            diagnostics.mismatched_kind(
                path("title"),
                DescriptorKind::String,
                DescriptorKind::Record,
                "zh",
            );
        }
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.kind(), DiagnosticKind::MismatchedKind);
        assert_eq!(diagnostic.languages(), vec!["zh"]);
    }

    #[test]
    fn test_serialize() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.unexpected_value_type(path("flags.beta"), "en", &RawValue::Bool(true));
        let json = serde_json::to_value(&diagnostics).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "path": "flags.beta",
                "kind": "unexpected-value-type",
                "found": { "en": "boolean" }
            }])
        );
    }
}
