//! Options consumed by the generate call.

use eyre::{Result, bail};
use glossa_core::{is_identifier, is_reserved_word};
use glossa_ir::Target;

use crate::builder::Indent;

/// Names of the declarations the generator emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// The schema type, `RootType` by default.
    pub root_type: String,
    /// The union of language identifiers, `Language` by default.
    pub language_type: String,
    /// The provider class, `I18nProvider` by default.
    pub provider_class: String,
    /// The exported provider instance, `provider` by default.
    pub provider_name: String,
}

impl Naming {
    /// Check every name can be used as a declaration name.
    pub fn validate(&self) -> Result<()> {
        for (what, name) in [
            ("root type", &self.root_type),
            ("language type", &self.language_type),
            ("provider class", &self.provider_class),
            ("provider name", &self.provider_name),
        ] {
            if !is_identifier(name) {
                bail!("{} name '{}' is not a valid identifier", what, name);
            }
            if is_reserved_word(name) {
                bail!("{} name '{}' is a reserved word", what, name);
            }
        }
        Ok(())
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            root_type: "RootType".to_string(),
            language_type: "Language".to_string(),
            provider_class: "I18nProvider".to_string(),
            provider_name: "provider".to_string(),
        }
    }
}

/// Everything the generate call needs besides the schema.
///
/// # Example
///
/// ```
/// use glossa_codegen::{GenerateOptions, Target};
///
/// let options = GenerateOptions::default()
///     .target(Target::Provider)
///     .lazy(true)
///     .default_language("zh");
/// assert!(options.splits_units());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub target: Target,
    /// Defer non-default languages to separate units loaded on demand.
    pub lazy: bool,
    /// Falls back to the first input language when unset.
    pub default_language: Option<String>,
    pub naming: Naming,
    /// Module specifier prefix for units imported from the main unit, e.g. `./`.
    pub import_prefix: String,
    /// Module name of the main unit, used by lazy units to import the schema type.
    pub main_module: String,
    pub indent: Indent,
}

impl GenerateOptions {
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    pub fn naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }

    pub fn import_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.import_prefix = prefix.into();
        self
    }

    pub fn main_module(mut self, module: impl Into<String>) -> Self {
        self.main_module = module.into();
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// True when non-default languages are emitted as their own units.
    ///
    /// The type-only target has no values to split out, so it always stays
    /// a single unit.
    pub fn splits_units(&self) -> bool {
        self.lazy && self.target != Target::Type
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            target: Target::default(),
            lazy: false,
            default_language: None,
            naming: Naming::default(),
            import_prefix: "./".to_string(),
            main_module: "index".to_string(),
            indent: Indent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.target, Target::Provider);
        assert!(!options.lazy);
        assert_eq!(options.naming.root_type, "RootType");
        assert_eq!(options.import_prefix, "./");
    }

    #[test]
    fn test_type_target_never_splits() {
        let options = GenerateOptions::default().target(Target::Type).lazy(true);
        assert!(!options.splits_units());
        assert!(GenerateOptions::default().lazy(true).splits_units());
    }

    #[test]
    fn test_naming_validation() {
        assert!(Naming::default().validate().is_ok());

        let naming = Naming {
            root_type: "Root-Type".to_string(),
            ..Naming::default()
        };
        assert!(naming.validate().is_err());

        let naming = Naming {
            provider_name: "default".to_string(),
            ..Naming::default()
        };
        let err = naming.validate().unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }
}
