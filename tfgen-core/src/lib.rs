//! Core utilities and types for the tfgen schema compiler.
//!
//! This crate provides the naming helpers and the generated-file abstraction
//! shared by the rest of the workspace.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, GeneratedFile, WriteResult};
// String utilities
pub use utils::{to_pascal_case, to_snake_case};
