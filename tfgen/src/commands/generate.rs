use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tfgen_spec::Specification;

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the specification (JSON, or TOML by extension)
    #[arg(short, long, default_value = "provider_code_spec.json")]
    pub spec: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Report roots that fail to convert and generate the rest
    #[arg(long)]
    pub skip_invalid: bool,

    /// Write pipeline snapshots to <output>/.tfgen/debug
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let specification = Specification::from_file(&self.spec).unwrap_or_exit();

        let report = ops::generate(
            specification,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                skip_invalid: self.skip_invalid,
                visualize: self.visualize,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
