//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use glossa_ir::NamedValue;

use super::GenerateOptions;
use crate::{Error, schema::Schema};

/// Trait for language-specific code generators.
///
/// Implement this trait to emit the i18n artifacts in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Generate the artifact for a diagnostic-free schema.
    ///
    /// This is the second of the two core calls.
    fn generate(&self, schema: &Schema, options: &GenerateOptions) -> Result<Artifact>;

    /// Generate and lay the units out as files, with the main unit at `main_path`.
    fn preview(
        &self,
        schema: &Schema,
        options: &GenerateOptions,
        main_path: &Path,
    ) -> Result<Vec<PreviewFile>> {
        let artifact = self.generate(schema, options)?;
        artifact.into_files(main_path, self.file_extension())
    }
}

/// Generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// One self-contained unit (eager generation).
    Single(String),
    /// A main unit plus one unit per non-default language (lazy generation).
    Split {
        main: String,
        others: Vec<NamedValue<String>>,
    },
}

impl Artifact {
    /// The unit that holds the schema type and the default language.
    pub fn main(&self) -> &str {
        match self {
            Artifact::Single(main) | Artifact::Split { main, .. } => main,
        }
    }

    /// Per-language units; empty for a single unit.
    pub fn others(&self) -> &[NamedValue<String>] {
        match self {
            Artifact::Single(_) => &[],
            Artifact::Split { others, .. } => others,
        }
    }

    /// Place the main unit at `main_path` and every other unit beside it as
    /// `<language>.<extension>`.
    ///
    /// # Errors
    ///
    /// [`Error::UnitPathCollision`] when a language unit lands on `main_path`.
    pub fn into_files(self, main_path: &Path, extension: &str) -> Result<Vec<PreviewFile>> {
        let dir = main_path.parent().unwrap_or_else(|| Path::new(""));
        match self {
            Artifact::Single(main) => Ok(vec![PreviewFile::new(main_path, main)]),
            Artifact::Split { main, others } => {
                let mut files = Vec::with_capacity(others.len() + 1);
                files.push(PreviewFile::new(main_path, main));
                for unit in others {
                    let path = dir.join(format!("{}.{}", unit.name, extension));
                    if path.as_path() == main_path {
                        return Err(Error::UnitPathCollision {
                            language: unit.name,
                            path,
                        }
                        .into());
                    }
                    files.push(PreviewFile::new(path, unit.value));
                }
                Ok(files)
            }
        }
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_into_files() {
        let files = Artifact::Single("code".to_string())
            .into_files(Path::new("src/i18n.ts"), "ts")
            .unwrap();
        assert_eq!(files, vec![PreviewFile::new("src/i18n.ts", "code")]);
    }

    #[test]
    fn test_split_into_files() {
        let artifact = Artifact::Split {
            main: "main".to_string(),
            others: vec![
                NamedValue::new("zh", "zh unit".to_string()),
                NamedValue::new("sp", "sp unit".to_string()),
            ],
        };
        assert_eq!(artifact.main(), "main");
        assert_eq!(artifact.others().len(), 2);

        let files = artifact.into_files(Path::new("src/i18n.ts"), "ts").unwrap();
        let paths: Vec<&Path> = files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("src/i18n.ts"),
                Path::new("src/zh.ts"),
                Path::new("src/sp.ts"),
            ]
        );
    }

    #[test]
    fn test_language_named_like_main_unit_collides() {
        let artifact = Artifact::Split {
            main: "main".to_string(),
            others: vec![
                NamedValue::new("zh", "zh unit".to_string()),
                NamedValue::new("i18n", "i18n unit".to_string()),
            ],
        };

        let err = artifact
            .into_files(Path::new("src/i18n.ts"), "ts")
            .unwrap_err();
        match err.downcast_ref::<Error>() {
            Some(Error::UnitPathCollision { language, path }) => {
                assert_eq!(language, "i18n");
                assert_eq!(path.as_path(), Path::new("src/i18n.ts"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
