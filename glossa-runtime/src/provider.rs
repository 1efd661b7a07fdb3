//! Eager language switching.

use eyre::Result;
use glossa_codegen::Schema;
use glossa_ir::NamedValue;
use indexmap::IndexMap;

use crate::{Error, Resource};

/// Holds every language's resource and a current-language pointer.
///
/// Switching is synchronous; every language is materialized up front.
#[derive(Debug, Clone)]
pub struct Provider {
    resources: IndexMap<String, Resource>,
    current: String,
}

impl Provider {
    /// # Errors
    ///
    /// [`Error::UnknownLanguage`] if `default` is not one of `resources`.
    pub fn new(resources: Vec<NamedValue<Resource>>, default: &str) -> Result<Self> {
        let resources: IndexMap<String, Resource> = resources
            .into_iter()
            .map(|resource| (resource.name, resource.value))
            .collect();
        if !resources.contains_key(default) {
            return Err(Error::UnknownLanguage(default.to_string()).into());
        }
        Ok(Self {
            resources,
            current: default.to_string(),
        })
    }

    /// Build from a unified schema, defaulting to its first language.
    pub fn from_schema(schema: &Schema, default: Option<&str>) -> Result<Self> {
        let default = schema.default_language(default)?;
        let resources = schema
            .languages()
            .iter()
            .map(|lang| NamedValue::new(lang.name.clone(), Resource::new(lang.value.clone())))
            .collect();
        Self::new(resources, default)
    }

    /// The current language.
    pub fn lang(&self) -> &str {
        &self.current
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn set_language(&mut self, lang: &str) -> Result<()> {
        if !self.resources.contains_key(lang) {
            return Err(Error::UnknownLanguage(lang.to_string()).into());
        }
        tracing::debug!(from = %self.current, to = %lang, "switching language");
        self.current = lang.to_string();
        Ok(())
    }

    /// The current language's resource.
    pub fn t(&self) -> &Resource {
        // The current language is always a key of `resources`
        &self.resources[self.current.as_str()]
    }
}
