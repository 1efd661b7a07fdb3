mod check;
mod completions;
mod generate;
mod inspect;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for glossa_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Extension trait for exiting with the numbered report when the locales
/// disagree on structure
pub(crate) trait ExitOnDiagnostics<T> {
    fn or_exit_on_diagnostics(self) -> Result<T>;
}

impl<T> ExitOnDiagnostics<T> for Result<T> {
    fn or_exit_on_diagnostics(self) -> Result<T> {
        if let Err(e) = &self
            && let Some(glossa_codegen::Error::Diagnostics { report, .. }) =
                e.downcast_ref::<glossa_codegen::Error>()
        {
            eprint!("{}", report);
            std::process::exit(1);
        }
        self
    }
}

#[derive(Parser)]
#[command(name = "glossa")]
#[command(version)]
#[command(about = "Generate type-safe TypeScript i18n modules from locale files")]
pub(crate) struct Cli {
    /// Log pipeline progress (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the i18n module from the locale files
    Generate(GenerateCommand),

    /// Check that every language has the same structure
    Check(CheckCommand),

    /// Print the canonical schema
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
