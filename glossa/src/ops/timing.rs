//! Phase timing plugin.

use std::{sync::Mutex, time::Instant};

use eyre::Result;
use glossa_codegen::pipeline::{CompilationContext, Plugin};

/// Logs how long each pipeline phase took at `debug` level.
#[derive(Debug, Default)]
pub struct TimingPlugin {
    started: Mutex<Option<Instant>>,
}

impl TimingPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Plugin for TimingPlugin {
    fn name(&self) -> &'static str {
        "timing"
    }

    fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        if let Ok(mut started) = self.started.lock() {
            *started = Some(Instant::now());
        }
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let elapsed = self
            .started
            .lock()
            .ok()
            .and_then(|mut started| started.take())
            .map(|start| start.elapsed());

        if let Some(elapsed) = elapsed {
            tracing::debug!(
                phase,
                elapsed_us = elapsed.as_micros() as u64,
                diagnostics = ctx.diagnostics.len(),
                "phase finished"
            );
        }
        Ok(())
    }
}
