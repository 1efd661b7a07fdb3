//! Generate command report data structures.

use std::path::PathBuf;

use glossa_codegen::{PreviewFile, Target};
use glossa_core::WriteResult;

use super::{
    SchemaSummary,
    output::{Output, Report},
};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub summary: SchemaSummary,
    pub default_language: String,
    pub target: Target,
    pub lazy: bool,
    pub result: GenerationResult,
}

/// What happened to the generated units.
#[derive(Debug)]
pub enum GenerationResult {
    /// Dry run: the units that would be written.
    Preview(Vec<PreviewFile>),
    /// The units were written to disk.
    Written(Vec<WrittenFile>),
}

/// One unit written to disk.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value(
            "Languages",
            &format!(
                "{} (default: {})",
                self.summary.languages.join(", "),
                self.default_language
            ),
        );
        out.key_value(
            "Target",
            &format!("{}{}", self.target, if self.lazy { " (lazy)" } else { "" }),
        );
        out.key_value("Messages", &self.summary.messages_line());
        out.newline();

        match &self.result {
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path.display().to_string());
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    if files.len() == 1 { "" } else { "s" }
                ));
            }
            GenerationResult::Written(files) => {
                out.section("Generated");
                for file in files {
                    let path = file.path.display().to_string();
                    match file.result {
                        WriteResult::Written => out.added_item(&path),
                        WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", path)),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn summary() -> SchemaSummary {
        SchemaSummary {
            languages: vec!["en".to_string(), "zh".to_string()],
            message_count: 1,
            call_count: 0,
        }
    }

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            summary: summary(),
            default_language: "en".to_string(),
            target: Target::Provider,
            lazy: true,
            result: GenerationResult::Written(vec![
                WrittenFile {
                    path: PathBuf::from("src/i18n.ts"),
                    result: WriteResult::Written,
                },
                WrittenFile {
                    path: PathBuf::from("src/zh.ts"),
                    result: WriteResult::Unchanged,
                },
            ]),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            "Languages: en, zh (default: en)
Target: provider (lazy)
Messages: 1 message (0 with placeholders)

Generated:
  + src/i18n.ts
  - src/zh.ts (unchanged)
"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            summary: summary(),
            default_language: "zh".to_string(),
            target: Target::Resource,
            lazy: false,
            result: GenerationResult::Preview(vec![PreviewFile::new(
                "src/i18n.ts",
                "export default {};\n",
            )]),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.stdout.contains("Target: resource\n"));
        assert!(out.stdout.ends_with(
            "── src/i18n.ts ──\nexport default {};\n── Summary ──\n1 file would be generated\n"
        ));
    }
}
