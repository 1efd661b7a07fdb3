//! Configuration and locale loading for the glossa i18n generator.
//!
//! - [`Manifest`] - the optional `glossa.toml`, with every key defaulted
//! - [`load_locales`] - read one YAML, JSON or TOML document per language
//!
//! Errors are [`miette`] diagnostics labelled with the offending source
//! location whenever the parser reports one.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod locales;
mod manifest;

pub use error::{Error, Result};
pub use locales::{LocaleFile, LocaleFormat, discover, load_locales};
pub use manifest::{
    CodegenConfig, I18nConfig, MANIFEST_FILE, Manifest, ParseContext, parse_manifest,
};
