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
pub struct DiffCommand {
    /// Baseline specification
    pub left: PathBuf,

    /// Specification to compare against the baseline
    pub right: PathBuf,
}

impl DiffCommand {
    pub fn run(&self) -> Result<()> {
        let left = Specification::from_file(&self.left).unwrap_or_exit();
        let right = Specification::from_file(&self.right).unwrap_or_exit();

        let report = ops::diff(&left, &right, &self.left, &self.right);
        report.render(&mut TerminalOutput::new());

        if !report.is_identical() {
            std::process::exit(1);
        }
        Ok(())
    }
}
