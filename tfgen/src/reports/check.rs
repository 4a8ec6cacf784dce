//! Check command report data structures.

use std::path::PathBuf;

use tfgen_codegen::pipeline::SchemaSummary;

use super::output::{Output, Report};

/// Report data from specification validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the specification.
    pub spec_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// One summary per converted root; empty when linting failed.
    pub summaries: Vec<SchemaSummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.spec_path.display()));
        out.newline();

        let count = self.summaries.len();
        out.section(&format!("{} root{}", count, if count == 1 { "" } else { "s" }));
        for summary in &self.summaries {
            out.list_item(&format!(
                "{} {} ({} attributes, {} blocks, depth {})",
                summary.target, summary.name, summary.attributes, summary.blocks, summary.max_depth
            ));
        }
    }
}
