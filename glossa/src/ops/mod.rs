//! Core operations.
//!
//! This module contains the business logic for glossa commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod inspect;
mod project;
mod timing;

pub use check::check;
pub use generate::generate;
pub use inspect::inspect;
pub use project::Project;
pub use timing::TimingPlugin;

use glossa_codegen::pipeline::Pipeline;

/// The pipeline every command runs: built-in phases plus phase timings.
pub fn pipeline() -> Pipeline {
    Pipeline::new().plugin(TimingPlugin::new())
}
