//! Compilation pipeline for the build and unify stages.
//!
//! [`Pipeline`] runs the phases over a [`CompilationContext`] created fresh
//! for every invocation:
//!
//! - `BuildPhase` - raw documents → per-language descriptor trees
//! - `UnifyPhase` - trees → canonical schema
//!
//! Both phases record structural problems into [`Diagnostics`] instead of
//! failing, so one run reports every disagreement at once.

mod context;
mod diagnostic;
mod path;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, MissingSide, Payload};
pub use path::{PathStack, SchemaPath};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
