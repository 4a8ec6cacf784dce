use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tfgen_spec::Specification;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the specification (JSON, or TOML by extension)
    #[arg(short, long, default_value = "provider_code_spec.json")]
    pub spec: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let specification = Specification::from_file(&self.spec).unwrap_or_exit();

        let report = ops::check(specification, &self.spec)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
