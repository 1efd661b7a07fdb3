use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ExitOnDiagnostics, UnwrapOrExit};
use crate::ops::{self, Project};

#[derive(Args)]
pub struct InspectCommand {
    /// Path to glossa.toml (defaults to ./glossa.toml)
    #[arg(short, long, default_value = "glossa.toml")]
    pub config: PathBuf,

    /// Directory holding the locale files (overrides glossa.toml)
    #[arg(long)]
    pub locales: Option<PathBuf>,

    /// Print the schema as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let mut project = Project::open(&self.config).unwrap_or_exit();
        if let Some(locales) = &self.locales {
            project.locales = locales.clone();
        }

        let documents = project.load_documents().unwrap_or_exit();
        let rendered = ops::inspect(documents, self.json).or_exit_on_diagnostics()?;
        print!("{}", rendered);
        if self.json {
            println!();
        }
        Ok(())
    }
}
