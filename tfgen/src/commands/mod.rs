mod check;
mod completions;
mod diff;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use diff::DiffCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on specification errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tfgen_spec::Result<T> {
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

#[derive(Parser)]
#[command(name = "tfgen")]
#[command(version)]
#[command(about = "Generate terraform-plugin-framework provider schemas")]
pub(crate) struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
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
            Commands::Diff(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go schema files from a specification
    Generate(GenerateCommand),

    /// Lint and convert a specification without generating code
    Check(CheckCommand),

    /// Compare the converted schemas of two specifications
    Diff(DiffCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from([
            "tfgen",
            "generate",
            "--spec",
            "provider.json",
            "--dry-run",
            "--skip-invalid",
            "-v",
        ]);

        assert!(cli.verbose);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.spec, std::path::PathBuf::from("provider.json"));
        assert_eq!(cmd.output, std::path::PathBuf::from("."));
        assert!(cmd.dry_run);
        assert!(cmd.skip_invalid);
        assert!(!cmd.visualize);
    }
}
