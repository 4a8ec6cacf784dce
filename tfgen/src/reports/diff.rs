//! Diff command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from comparing two specifications.
#[derive(Debug)]
pub struct DiffReport {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Roots that failed to convert, prefixed with their file.
    pub failures: Vec<String>,
    /// Structural differences between the converted schemas.
    pub differences: Vec<String>,
}

impl DiffReport {
    /// Whether both sides converted fully and compare equal.
    pub fn is_identical(&self) -> bool {
        self.failures.is_empty() && self.differences.is_empty()
    }
}

impl Report for DiffReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(failure);
        }

        if self.differences.is_empty() {
            out.preformatted(&format!(
                "{} and {} are structurally equal",
                self.left.display(),
                self.right.display()
            ));
            return;
        }

        out.section(&format!("{} difference(s)", self.differences.len()));
        for difference in &self.differences {
            out.list_item(difference);
        }
    }
}
