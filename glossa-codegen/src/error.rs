//! Typed failures of the generation engine.

use std::path::PathBuf;

use crate::pipeline::Diagnostics;

/// Errors raised by the build, unify, generate and layout stages.
///
/// These are carried inside [`eyre::Report`]s; callers that need to branch
/// on a specific failure use `report.downcast_ref::<Error>()`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input set was empty.
    #[error("no languages supplied")]
    NoLanguages,

    /// Two inputs carry the same language name.
    #[error("language `{0}` is supplied more than once")]
    DuplicateLanguage(String),

    /// The requested default language is not one of the inputs.
    #[error("default language `{0}` is not one of the input languages")]
    UnknownDefaultLanguage(String),

    /// Unification finished with the accumulator still unconstrained.
    #[error("the schema was never constrained by any language")]
    UnconstrainedSchema,

    /// A key was popped from the path context that was not the last one pushed.
    #[error("path context out of balance: expected to leave `{expected}`, found `{actual}`")]
    PathContextMismatch { expected: String, actual: String },

    /// A lazily loaded language would be written over the main unit.
    #[error("language `{language}` unit would overwrite the main unit at {}", .path.display())]
    UnitPathCollision { language: String, path: PathBuf },

    /// The languages disagree on structure; `report` is the rendered list.
    #[error("{report}")]
    Diagnostics {
        report: String,
        diagnostics: Diagnostics,
    },
}
