//! Check command report data structures.

use super::{
    SchemaSummary,
    output::{Output, Report},
};

/// Report data from a build+unify+diagnose run.
#[derive(Debug)]
pub enum CheckReport {
    /// Every language has the same structure.
    Valid {
        summary: SchemaSummary,
        /// The canonical schema as an indented tree.
        tree: String,
    },
    /// The numbered diagnostic report.
    Invalid { problems: String },
}

impl CheckReport {
    /// Whether the check passed (no diagnostics).
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckReport::Valid { .. })
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            CheckReport::Invalid { problems } => out.error(problems),
            CheckReport::Valid { summary, tree } => {
                out.preformatted(&format!(
                    "✓ {} language{} agree: {}",
                    summary.languages.len(),
                    if summary.languages.len() == 1 { "" } else { "s" },
                    summary.languages.join(", ")
                ));
                out.newline();
                out.section(&summary.messages_line());
                out.preformatted(tree);
            }
        }
    }
}
