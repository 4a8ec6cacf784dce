//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the
//! compilation phases from a loaded specification to the IR forest that
//! generators consume. The pipeline provides:
//!
//! - Explicit phase boundaries (validate → convert → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared computation via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use tfgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(specification)?;
//!
//! for failure in &ctx.failures {
//!     eprintln!("skipped {failure}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;
mod summary;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
pub use summary::SchemaSummary;
