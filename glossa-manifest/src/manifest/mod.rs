//! Manifest types and parsing for glossa.toml files.

mod parse;
mod validate;

use std::path::PathBuf;

use glossa_ir::Target;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE: &str = "glossa.toml";

/// Root manifest for glossa.toml
///
/// Every key is optional; an absent file is the same as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// What to read and what to emit
    pub i18n: I18nConfig,

    /// Names and layout of the emitted code
    pub codegen: CodegenConfig,
}

/// The `[i18n]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Directory holding one locale file per language
    pub locales: PathBuf,

    /// Path of the main generated unit; lazy units are written next to it
    pub output: PathBuf,

    pub target: Target,

    /// Load non-default languages on demand
    pub lazy: bool,

    /// Defaults to the first language
    pub default_language: Option<String>,

    /// Explicit language order; other locale files are ignored when set
    pub languages: Option<Vec<String>>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: PathBuf::from("locales"),
            output: PathBuf::from("src/i18n.ts"),
            target: Target::default(),
            lazy: false,
            default_language: None,
            languages: None,
        }
    }
}

/// The `[codegen]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    pub root_type: String,
    pub language_type: String,
    pub provider_class: String,
    pub provider_name: String,

    /// Module specifier prefix for lazily imported units
    pub import_prefix: String,

    /// Spaces per indentation level: 2, 4 or 8
    pub indent: u8,

    /// Indent with tabs instead of spaces
    pub use_tabs: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            root_type: "RootType".to_string(),
            language_type: "Language".to_string(),
            provider_class: "I18nProvider".to_string(),
            provider_name: "provider".to_string(),
            import_prefix: "./".to_string(),
            indent: 2,
            use_tabs: false,
        }
    }
}

impl CodegenConfig {
    /// Configured declaration names, paired with what they name.
    pub fn names(&self) -> [(&'static str, &str); 4] {
        [
            ("root type", &self.root_type),
            ("language type", &self.language_type),
            ("provider class", &self.provider_class),
            ("provider", &self.provider_name),
        ]
    }
}
