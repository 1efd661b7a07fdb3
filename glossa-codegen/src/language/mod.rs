//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`GenerateOptions`] / [`Naming`] - What to generate and how to name it
//! - [`Artifact`] - The generated source unit(s)
//! - [`PreviewFile`] - Generated file preview

mod options;
mod traits;

pub use options::{GenerateOptions, Naming};
pub use traits::{Artifact, LanguageCodegen, PreviewFile};
