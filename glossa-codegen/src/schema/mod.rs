//! The unified schema handed from analysis to code generation.

mod display;

use eyre::Result;
use glossa_ir::{NamedValue, RecordTypeDescriptor};

pub use display::{DisplayStyle, SchemaTreeDisplay};

use crate::Error;

/// A canonical schema together with the per-language trees it was unified from.
///
/// Only produced by a diagnostic-free run, so every language tree is known
/// to agree with `canonical` on keys, kinds and call parameters.
#[derive(Debug, Clone)]
pub struct Schema {
    canonical: RecordTypeDescriptor,
    languages: Vec<NamedValue<RecordTypeDescriptor>>,
}

impl Schema {
    pub fn new(
        canonical: RecordTypeDescriptor,
        languages: Vec<NamedValue<RecordTypeDescriptor>>,
    ) -> Self {
        Self {
            canonical,
            languages,
        }
    }

    pub fn canonical(&self) -> &RecordTypeDescriptor {
        &self.canonical
    }

    /// Per-language trees, in input order.
    pub fn languages(&self) -> &[NamedValue<RecordTypeDescriptor>] {
        &self.languages
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.name.as_str())
    }

    pub fn language(&self, name: &str) -> Option<&RecordTypeDescriptor> {
        self.languages
            .iter()
            .find(|lang| lang.name == name)
            .map(|lang| &lang.value)
    }

    /// Resolve the default language: `requested` if given, else the first input language.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownDefaultLanguage`] if `requested` is not an input
    /// language, [`Error::NoLanguages`] if there are none.
    pub fn default_language<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str> {
        match requested {
            Some(name) if self.language(name).is_some() => Ok(name),
            Some(name) => Err(Error::UnknownDefaultLanguage(name.to_string()).into()),
            None => self
                .language_names()
                .next()
                .ok_or_else(|| Error::NoLanguages.into()),
        }
    }
}
