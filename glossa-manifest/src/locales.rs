//! Locale discovery and parsing.
//!
//! A locale directory holds one file per language, named after the
//! language: `en.yaml`, `zh.json`, `pt-BR.toml`.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use glossa_ir::{NamedValue, RawDocument};
use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Supported locale file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFormat {
    Yaml,
    Json,
    Toml,
}

impl LocaleFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Parse a locale document, labelling the failure location when the
    /// parser reports one.
    pub fn parse(self, content: &str, path: &Path) -> Result<RawDocument> {
        let ctx = SourceContext::new(content, path.display().to_string());
        match self {
            Self::Yaml => serde_yaml_ng::from_str(content).map_err(|e| {
                let span = e.location().map(|loc| point_span(content, loc.index()));
                ctx.locale_error(path, e.to_string(), span)
            }),
            Self::Json => serde_json::from_str(content).map_err(|e| {
                let span = line_column_offset(content, e.line(), e.column())
                    .map(|offset| point_span(content, offset));
                ctx.locale_error(path, e.to_string(), span)
            }),
            Self::Toml => toml::from_str(content).map_err(|e| {
                let span = e.span().map(SourceSpan::from);
                ctx.locale_error(path, e.message().to_string(), span)
            }),
        }
    }
}

impl fmt::Display for LocaleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// The file stem, used as the language identifier
    pub language: String,
    pub path: PathBuf,
    pub format: LocaleFormat,
}

impl LocaleFile {
    /// Read and parse the file.
    pub fn load(&self) -> Result<NamedValue<RawDocument>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Box::new(Error::Io {
                path: self.path.clone(),
                source: e,
            })
        })?;
        let document = self.format.parse(&content, &self.path)?;
        tracing::debug!(
            language = %self.language,
            format = %self.format,
            keys = document.len(),
            "loaded locale"
        );
        Ok(NamedValue::new(self.language.clone(), document))
    }
}

/// List the locale files in `dir`, sorted by language.
///
/// Files with other extensions are ignored.
pub fn discover(dir: &Path) -> Result<Vec<LocaleFile>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Box::new(Error::Io {
            path: dir.to_path_buf(),
            source: e,
        })
    })?;

    let mut files: Vec<LocaleFile> = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| {
                Box::new(Error::Io {
                    path: dir.to_path_buf(),
                    source: e,
                })
            })?
            .path();
        if !path.is_file() {
            continue;
        }
        let Some(format) = LocaleFormat::from_path(&path) else {
            continue;
        };
        let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        files.push(LocaleFile {
            language: language.to_string(),
            path,
            format,
        });
    }

    // Ordinal order keeps the language order stable across platforms
    files.sort_by(|a, b| a.language.cmp(&b.language).then(a.path.cmp(&b.path)));
    if let Some(pair) = files.windows(2).find(|w| w[0].language == w[1].language) {
        return Err(Box::new(Error::DuplicateLocale {
            language: pair[0].language.clone(),
            first: pair[0].path.clone(),
            second: pair[1].path.clone(),
        }));
    }
    Ok(files)
}

/// Load every language document from `dir`.
///
/// With `languages`, only the listed languages are loaded, in that order;
/// otherwise every locale file is loaded in language order. The order
/// matters: the first language fixes the canonical key set.
pub fn load_locales(
    dir: &Path,
    languages: Option<&[String]>,
) -> Result<Vec<NamedValue<RawDocument>>> {
    let files = discover(dir)?;

    let selected: Vec<&LocaleFile> = match languages {
        Some(languages) => languages
            .iter()
            .map(|language| {
                files
                    .iter()
                    .find(|file| &file.language == language)
                    .ok_or_else(|| {
                        Box::new(Error::MissingLocale {
                            language: language.clone(),
                            path: dir.to_path_buf(),
                        })
                    })
            })
            .collect::<Result<_>>()?,
        None => files.iter().collect(),
    };

    if selected.is_empty() {
        return Err(Box::new(Error::NoLocales {
            path: dir.to_path_buf(),
        }));
    }

    selected.into_iter().map(LocaleFile::load).collect()
}

/// A one-character span at `offset`, or an empty span at the end of input.
fn point_span(src: &str, offset: usize) -> SourceSpan {
    let offset = offset.min(src.len());
    let len = src[offset..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::from((offset, len))
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let line_text = src[line_start..].lines().next().unwrap_or("");
    let column_offset = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line_text.len(), |(i, _)| i);
    Some(line_start + column_offset)
}
