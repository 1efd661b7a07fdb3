use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use glossa_ir::Target;

use super::{ExitOnDiagnostics, UnwrapOrExit};
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to glossa.toml (defaults to ./glossa.toml)
    #[arg(short, long, default_value = "glossa.toml")]
    pub config: PathBuf,

    /// Directory holding the locale files (overrides glossa.toml)
    #[arg(long)]
    pub locales: Option<PathBuf>,

    /// Path of the main generated unit (overrides glossa.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// What to generate: resource, provider or type (overrides glossa.toml)
    #[arg(short, long)]
    pub target: Option<Target>,

    /// Load non-default languages on demand
    #[arg(long)]
    pub lazy: bool,

    /// Language selected initially (defaults to the first language)
    #[arg(short, long)]
    pub default_language: Option<String>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut project = Project::open(&self.config).unwrap_or_exit();
        self.apply_overrides(&mut project);

        let documents = project.load_documents().unwrap_or_exit();
        let report = ops::generate(&project, documents, self.dry_run).or_exit_on_diagnostics()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn apply_overrides(&self, project: &mut Project) {
        if let Some(locales) = &self.locales {
            project.locales = locales.clone();
        }
        if let Some(output) = &self.output {
            project.output = output.clone();
        }

        let i18n = &mut project.manifest.i18n;
        if let Some(target) = self.target {
            i18n.target = target;
        }
        if self.lazy {
            i18n.lazy = true;
        }
        if let Some(language) = &self.default_language {
            i18n.default_language = Some(language.clone());
        }
    }
}
