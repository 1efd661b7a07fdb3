use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to glossa.toml (defaults to ./glossa.toml)
    #[arg(short, long, default_value = "glossa.toml")]
    pub config: PathBuf,

    /// Directory holding the locale files (overrides glossa.toml)
    #[arg(long)]
    pub locales: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mut project = Project::open(&self.config).unwrap_or_exit();
        if let Some(locales) = &self.locales {
            project.locales = locales.clone();
        }

        let documents = project.load_documents().unwrap_or_exit();
        let report = ops::check(documents)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
