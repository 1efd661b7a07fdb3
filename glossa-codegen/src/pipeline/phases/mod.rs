//! Built-in pipeline phases.
//!
//! - [`BuildPhase`] - classifies each raw document into a descriptor tree
//! - [`UnifyPhase`] - folds all trees into the canonical schema

mod build;
mod unify;

pub use build::{BuildPhase, build_descriptor};
pub use unify::{UnifyPhase, unify};
