//! Generate operation - code generation from locale documents.

use eyre::{Context, Result};
use glossa_codegen::LanguageCodegen;
use glossa_codegen_typescript::Generator;
use glossa_core::File;
use glossa_ir::{NamedValue, RawDocument};

use super::Project;
use crate::reports::{GenerateReport, GenerationResult, SchemaSummary, WrittenFile};

/// Execute the generate operation.
///
/// Runs the pipeline on the documents and emits the configured target next
/// to `project.output`. With `dry_run`, nothing is written.
///
/// # Errors
///
/// Structural disagreements surface as [`glossa_codegen::Error::Diagnostics`],
/// unchanged so callers can print the report.
pub fn generate(
    project: &Project,
    documents: Vec<NamedValue<RawDocument>>,
    dry_run: bool,
) -> Result<GenerateReport> {
    let schema = super::pipeline().compile(documents)?;
    let options = project.generate_options();
    let default_language = schema
        .default_language(options.default_language.as_deref())?
        .to_string();

    let generator = Generator::new();
    let files = generator
        .preview(&schema, &options, &project.output)
        .wrap_err("failed to generate code")?;

    let result = if dry_run {
        GenerationResult::Preview(files)
    } else {
        let written = files
            .into_iter()
            .map(|file| -> Result<WrittenFile> {
                let result = File::new(&file.path, file.content).write()?;
                tracing::debug!(path = %file.path.display(), ?result, "unit written");
                Ok(WrittenFile {
                    path: file.path,
                    result,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        summary: SchemaSummary::new(&schema),
        default_language,
        target: options.target,
        lazy: options.lazy,
        result,
    })
}
