//! A manifest together with the paths it resolves to.

use std::path::{Path, PathBuf};

use glossa_codegen::{GenerateOptions, Naming, builder::Indent};
use glossa_ir::{NamedValue, RawDocument};
use glossa_manifest::{Manifest, load_locales};

/// The loaded configuration of one glossa project.
///
/// Paths in the manifest are relative to the manifest's directory; they are
/// resolved once here so command-line overrides can replace them with paths
/// relative to the working directory.
#[derive(Debug, Clone)]
pub struct Project {
    pub manifest: Manifest,
    /// Directory holding the locale files.
    pub locales: PathBuf,
    /// Path of the main generated unit.
    pub output: PathBuf,
}

impl Project {
    /// Load `config`, falling back to the defaults when it does not exist.
    pub fn open(config: &Path) -> glossa_manifest::Result<Self> {
        let manifest = Manifest::from_file_or_default(config)?;
        let root = config.parent().unwrap_or_else(|| Path::new(""));

        Ok(Self {
            locales: root.join(&manifest.i18n.locales),
            output: root.join(&manifest.i18n.output),
            manifest,
        })
    }

    /// Load every selected locale document, in language order.
    pub fn load_documents(&self) -> glossa_manifest::Result<Vec<NamedValue<RawDocument>>> {
        load_locales(&self.locales, self.manifest.i18n.languages.as_deref())
    }

    /// Options for the generate call, from the `[i18n]` and `[codegen]` sections.
    pub fn generate_options(&self) -> GenerateOptions {
        let i18n = &self.manifest.i18n;
        let codegen = &self.manifest.codegen;

        let mut options = GenerateOptions::default()
            .target(i18n.target)
            .lazy(i18n.lazy)
            .naming(Naming {
                root_type: codegen.root_type.clone(),
                language_type: codegen.language_type.clone(),
                provider_class: codegen.provider_class.clone(),
                provider_name: codegen.provider_name.clone(),
            })
            .import_prefix(codegen.import_prefix.clone())
            .indent(self.indent());

        if let Some(stem) = self.output.file_stem().and_then(|s| s.to_str()) {
            options = options.main_module(stem);
        }
        if let Some(language) = &i18n.default_language {
            options = options.default_language(language.clone());
        }
        options
    }

    fn indent(&self) -> Indent {
        if self.manifest.codegen.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.manifest.codegen.indent)
        }
    }
}
