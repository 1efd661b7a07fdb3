//! Pipeline orchestrator.

use eyre::Result;
use glossa_ir::{NamedValue, RawDocument};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{BuildPhase, UnifyPhase},
};
use crate::{Error, report, schema::Schema};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (build, unify) followed by any user phases,
/// calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```
/// use glossa_codegen::pipeline::Pipeline;
/// use glossa_ir::{NamedValue, RawDocument};
///
/// let schema = Pipeline::new()
///     .compile(vec![
///         NamedValue::new("en", RawDocument::new().entry("ok", "OK")),
///         NamedValue::new("zh", RawDocument::new().entry("ok", "好")),
///     ])
///     .unwrap();
///
/// assert_eq!(schema.language_names().collect::<Vec<_>>(), vec!["en", "zh"]);
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases only.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run every phase and return the resulting context.
    ///
    /// Diagnostics are left in the context; use [`Pipeline::compile`] to turn
    /// them into a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, documents: Vec<NamedValue<RawDocument>>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(documents);
        tracing::debug!(languages = ctx.documents.len(), "running pipeline");

        let builtin_phases: [Box<dyn Phase>; 2] = [Box::new(BuildPhase), Box::new(UnifyPhase)];
        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Build, unify and diagnose: the first of the two core calls.
    ///
    /// # Errors
    ///
    /// Fails atomically with [`Error::Diagnostics`] when any diagnostic was
    /// recorded, carrying the rendered report.
    pub fn compile(&self, documents: Vec<NamedValue<RawDocument>>) -> Result<Schema> {
        let mut ctx = self.run(documents)?;

        if ctx.has_errors() {
            tracing::debug!(count = ctx.diagnostics.len(), "schema has diagnostics");
            let report = report::render(&ctx.diagnostics, &ctx.trees);
            return Err(Error::Diagnostics {
                report,
                diagnostics: ctx.diagnostics,
            }
            .into());
        }

        let canonical = ctx.schema.take().ok_or(Error::UnconstrainedSchema)?;
        Ok(Schema::new(canonical, ctx.trees))
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::trace!(phase = phase_name, "{}", phase.description());

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
