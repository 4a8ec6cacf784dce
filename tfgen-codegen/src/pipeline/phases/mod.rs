//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - lints the specification and collects diagnostics
//! - [`ConvertPhase`] - converts each root to IR
//! - [`AnalyzePhase`] - summarizes the converted roots

mod analyze;
mod convert;
mod validate;

pub use analyze::AnalyzePhase;
pub use convert::ConvertPhase;
pub use validate::{
    AttributeNamingLint, DuplicateNameLint, EmptyDescriptionLint, Lint, LintInfo,
    ResourceOnlyLint, ValidatePhase,
};
