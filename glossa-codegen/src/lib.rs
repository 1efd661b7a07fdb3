//! Schema unification and shared code generation utilities for glossa.
//!
//! Collaborators use two calls:
//!
//! 1. [`analyze`] - build a descriptor tree per language, unify them into the
//!    canonical schema, and fail with a rendered report if the languages
//!    disagree.
//! 2. [`LanguageCodegen::generate`] - emit the requested [`Target`] from the
//!    resulting [`Schema`].
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Build and unify phases, diagnostics
//! - [`report`] - Rendering of diagnostics
//! - [`schema`] - The unified schema and its tree display
//! - [`language`] - Language-specific abstractions (LanguageCodegen, GenerateOptions, etc.)

pub mod builder;
mod error;
pub mod language;
pub mod pipeline;
mod placeholder;
pub mod report;
pub mod schema;

pub use error::Error;
use eyre::Result;
pub use glossa_ir::Target;
use glossa_ir::{NamedValue, RawDocument};
pub use language::{Artifact, GenerateOptions, LanguageCodegen, Naming, PreviewFile};
pub use placeholder::extract_segments;
pub use schema::Schema;

/// Build, unify and diagnose a set of language documents.
///
/// Input order matters: the first document fixes the canonical key set.
///
/// # Errors
///
/// [`Error::NoLanguages`] for an empty set, [`Error::DuplicateLanguage`] when
/// a language name repeats, [`Error::Diagnostics`] when the languages disagree
/// on structure.
pub fn analyze(documents: Vec<NamedValue<RawDocument>>) -> Result<Schema> {
    pipeline::Pipeline::new().compile(documents)
}
