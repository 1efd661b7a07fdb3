//! Compilation context passed through pipeline phases.

use glossa_ir::{NamedValue, RawDocument, RecordTypeDescriptor};

use super::Diagnostics;

/// State of one generation run.
///
/// Created fresh for every run: nothing here is shared between
/// invocations.
#[derive(Debug)]
pub struct CompilationContext {
    /// The input documents, in caller order.
    pub documents: Vec<NamedValue<RawDocument>>,
    /// Per-language descriptor trees (populated by `BuildPhase`).
    pub trees: Vec<NamedValue<RecordTypeDescriptor>>,
    /// The canonical schema (populated by `UnifyPhase`).
    pub schema: Option<RecordTypeDescriptor>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Diagnostics,
}

impl CompilationContext {
    /// Create a new compilation context from the input documents.
    pub fn new(documents: Vec<NamedValue<RawDocument>>) -> Self {
        Self {
            documents,
            trees: Vec::new(),
            schema: None,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Check if any diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Language names in input order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|doc| doc.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(vec![
            NamedValue::new("en", RawDocument::new()),
            NamedValue::new("zh", RawDocument::new()),
        ]);

        assert!(ctx.trees.is_empty());
        assert!(ctx.schema.is_none());
        assert!(!ctx.has_errors());
        assert_eq!(ctx.languages().collect::<Vec<_>>(), vec!["en", "zh"]);
    }
}
