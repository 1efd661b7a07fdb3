//! Shape of a unified schema, shared by the check and generate reports.

use glossa_codegen::Schema;

/// Counts describing a canonical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSummary {
    /// Languages in input order.
    pub languages: Vec<String>,
    /// Leaf messages, plain and parameterized.
    pub message_count: usize,
    /// Messages with placeholders.
    pub call_count: usize,
}

impl SchemaSummary {
    pub fn new(schema: &Schema) -> Self {
        Self {
            languages: schema.language_names().map(str::to_string).collect(),
            message_count: schema.canonical().leaf_count(),
            call_count: schema.canonical().call_count(),
        }
    }

    /// One line such as `3 messages (1 with placeholders)`.
    pub fn messages_line(&self) -> String {
        format!(
            "{} message{} ({} with placeholders)",
            self.message_count,
            if self.message_count == 1 { "" } else { "s" },
            self.call_count
        )
    }
}

#[cfg(test)]
mod tests {
    use glossa_ir::{NamedValue, RawDocument};

    use super::*;

    #[test]
    fn test_summary_counts() {
        let schema = glossa_codegen::analyze(vec![
            NamedValue::new(
                "en",
                RawDocument::new()
                    .entry("ok", "OK")
                    .entry("dialog", RawDocument::new().entry("greet", "hi {{ name }}")),
            ),
            NamedValue::new(
                "zh",
                RawDocument::new()
                    .entry("ok", "好")
                    .entry("dialog", RawDocument::new().entry("greet", "{{ name }}你好")),
            ),
        ])
        .unwrap();

        let summary = SchemaSummary::new(&schema);
        assert_eq!(summary.languages, vec!["en", "zh"]);
        assert_eq!(summary.messages_line(), "2 messages (1 with placeholders)");
    }
}
