//! Language-tagged values.

/// Pairs a language identifier with a value.
///
/// Used throughout the pipeline so the per-language association travels
/// alongside the structural data (raw documents, descriptor trees, emitted
/// code units).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue<T> {
    /// Opaque language identifier, e.g. `"en"`.
    pub name: String,
    pub value: T,
}

impl<T> NamedValue<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn as_ref(&self) -> NamedValue<&T> {
        NamedValue {
            name: self.name.clone(),
            value: &self.value,
        }
    }

    /// Transform the value, keeping the name.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NamedValue<U> {
        NamedValue {
            name: self.name,
            value: f(self.value),
        }
    }
}
