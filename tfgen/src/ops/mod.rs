//! Core operations.
//!
//! This module contains the business logic for tfgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod diff;
pub mod generate;

pub use check::check;
pub use diff::diff;
pub use generate::generate;

use tfgen_codegen::pipeline::Diagnostic;

/// A diagnostic message followed by its location, if any.
pub(crate) fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{}\n  --> {}", diagnostic.message, location),
        None => diagnostic.message.clone(),
    }
}
