//! Compilation context passed through pipeline phases.

use eyre::Result;
use tfgen_ir::Schema;
use tfgen_spec::Specification;

use super::{
    SchemaSummary,
    diagnostic::{Diagnostic, Severity},
};
use crate::convert::ConvertFailure;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The specification being compiled.
    pub specification: Specification,
    /// The converted IR forest (populated by ConvertPhase).
    pub schemas: Option<Vec<Schema>>,
    /// Roots that failed to convert (populated by ConvertPhase).
    pub failures: Vec<ConvertFailure>,
    /// Per-root summaries (populated by AnalyzePhase).
    pub summaries: Option<Vec<SchemaSummary>>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a specification.
    pub fn new(specification: Specification) -> Self {
        Self {
            specification,
            schemas: None,
            failures: Vec::new(),
            summaries: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR forest out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if ConvertPhase has not run.
    pub fn take_schemas(&mut self) -> Result<Vec<Schema>> {
        self.schemas
            .take()
            .ok_or_else(|| eyre::eyre!("schemas not set - did ConvertPhase run?"))
    }

    /// Take the summaries out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if AnalyzePhase has not run.
    pub fn take_summaries(&mut self) -> Result<Vec<SchemaSummary>> {
        self.summaries
            .take()
            .ok_or_else(|| eyre::eyre!("summaries not set - did AnalyzePhase run?"))
    }
}
