//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{MANIFEST_FILE, Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a glossa.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no manifest found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &ParseContext::new(&source_ctx))?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    for (context, name) in manifest.codegen.names() {
        ctx.validate_name(name, context)?;
    }

    if ![2, 4, 8].contains(&manifest.codegen.indent) {
        return Err(ctx.validation_error(
            format!(
                "indent must be 2, 4 or 8 spaces, got {}",
                manifest.codegen.indent
            ),
            ctx.find_key_span("indent"),
        ));
    }

    let i18n = &manifest.i18n;
    if let Some(languages) = &i18n.languages {
        if languages.is_empty() {
            return Err(ctx.validation_error(
                "languages must not be empty",
                ctx.find_key_span("languages"),
            ));
        }
        for (i, language) in languages.iter().enumerate() {
            if languages[..i].contains(language) {
                return Err(ctx.validation_error(
                    format!("language '{}' is listed twice", language),
                    ctx.find_string_span(language),
                ));
            }
        }
        if let Some(default) = &i18n.default_language
            && !languages.contains(default)
        {
            return Err(ctx.validation_error(
                format!("default language '{}' is not in languages", default),
                ctx.find_key_span("default_language"),
            ));
        }
    }

    Ok(())
}
