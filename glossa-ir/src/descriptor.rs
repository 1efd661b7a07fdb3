//! Type descriptors: the classified shape of a locale document.

use std::{collections::BTreeSet, fmt};

use indexmap::IndexMap;
use serde::Serialize;

/// One piece of a placeholder-bearing message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArgSegment {
    /// Literal text copied verbatim into the output.
    Literal { value: String },
    /// A named substitution point, written `{{ name }}` in the source.
    Param { name: String },
}

impl ArgSegment {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::Param { name: name.into() }
    }

    /// The parameter name, if this is a [`ArgSegment::Param`].
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param { name } => Some(name),
            Self::Literal { .. } => None,
        }
    }
}

/// The three descriptor kinds, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DescriptorKind {
    String,
    Call,
    Record,
}

impl DescriptorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorKind::String => "String",
            DescriptorKind::Call => "Call",
            DescriptorKind::Record => "Record",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message without placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringTypeDescriptor {
    pub value: String,
}

/// A message with at least one placeholder.
///
/// The body is never empty: a string without placeholders is always a
/// [`StringTypeDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallTypeDescriptor {
    pub body: Vec<ArgSegment>,
}

impl CallTypeDescriptor {
    /// Distinct parameter names, sorted by ordinal (case-sensitive) order.
    pub fn param_names(&self) -> BTreeSet<&str> {
        self.body.iter().filter_map(ArgSegment::param_name).collect()
    }

    /// Parameter names in the order they appear in the message, duplicates kept.
    pub fn params_in_order(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(ArgSegment::param_name)
    }
}

/// A nested namespace of messages.
///
/// A record can be marked *missing*: it has not been constrained yet and
/// accepts whatever keys the next merged tree provides. The marker only
/// exists while the unifier accumulates; a finished schema never carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordTypeDescriptor {
    pub value: IndexMap<String, TypeDescriptor>,
    #[serde(skip)]
    missing: bool,
}

impl RecordTypeDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty, unconstrained record (the unifier's starting accumulator).
    pub fn missing() -> Self {
        Self {
            value: IndexMap::new(),
            missing: true,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Fix the record's key set.
    pub fn clear_missing(&mut self) {
        self.missing = false;
    }

    pub fn insert(&mut self, key: impl Into<String>, descriptor: TypeDescriptor) {
        self.value.insert(key.into(), descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&TypeDescriptor> {
        self.value.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut TypeDescriptor> {
        self.value.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.value.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeDescriptor)> {
        self.value.iter()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Resolve a key chain from this record.
    ///
    /// Returns `None` as soon as a segment is absent or a non-record node is
    /// reached before the chain is exhausted.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Option<&TypeDescriptor> {
        let (first, rest) = path.split_first()?;
        let node = self.value.get(first.as_ref())?;
        if rest.is_empty() {
            return Some(node);
        }
        match node {
            TypeDescriptor::Record(record) => record.lookup(rest),
            _ => None,
        }
    }

    /// Resolve a dot-joined path such as `dialog.ok`.
    pub fn lookup_dotted(&self, path: &str) -> Option<&TypeDescriptor> {
        let segments: Vec<&str> = path.split('.').collect();
        self.lookup(&segments)
    }

    /// Number of leaf messages (strings and calls) in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.value
            .values()
            .map(|node| match node {
                TypeDescriptor::Record(record) => record.leaf_count(),
                _ => 1,
            })
            .sum()
    }

    /// Number of call messages in this subtree.
    pub fn call_count(&self) -> usize {
        self.value
            .values()
            .map(|node| match node {
                TypeDescriptor::Record(record) => record.call_count(),
                TypeDescriptor::Call(_) => 1,
                TypeDescriptor::String(_) => 0,
            })
            .sum()
    }
}

/// The classified representation of one node of a locale document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDescriptor {
    String(StringTypeDescriptor),
    Call(CallTypeDescriptor),
    Record(RecordTypeDescriptor),
}

impl TypeDescriptor {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringTypeDescriptor {
            value: value.into(),
        })
    }

    pub fn call(body: Vec<ArgSegment>) -> Self {
        Self::Call(CallTypeDescriptor { body })
    }

    pub fn record(record: RecordTypeDescriptor) -> Self {
        Self::Record(record)
    }

    pub fn kind(&self) -> DescriptorKind {
        match self {
            TypeDescriptor::String(_) => DescriptorKind::String,
            TypeDescriptor::Call(_) => DescriptorKind::Call,
            TypeDescriptor::Record(_) => DescriptorKind::Record,
        }
    }

    pub fn as_record(&self) -> Option<&RecordTypeDescriptor> {
        match self {
            TypeDescriptor::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallTypeDescriptor> {
        match self {
            TypeDescriptor::Call(call) => Some(call),
            _ => None,
        }
    }
}
