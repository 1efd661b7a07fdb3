//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads and
/// modifies the compilation context.
///
/// Built-in phases:
/// - `BuildPhase` - classifies every document into a descriptor tree
/// - `UnifyPhase` - folds the trees into the canonical schema
pub trait Phase: Send + Sync {
    /// The name of this phase (used in logs and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Structural problems in
    /// the input are recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
