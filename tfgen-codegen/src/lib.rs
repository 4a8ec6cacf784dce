//! Spec conversion, compile pipeline, and shared code generation utilities.
//!
//! This crate turns a loaded specification into the IR and provides the
//! language-agnostic pieces target generators (e.g. `tfgen-codegen-go`) build on.
//!
//! # Module Organization
//!
//! - [`convert`] - Spec Converter from `tfgen-spec` trees to `tfgen-ir` nodes
//! - [`pipeline`] - Compile phases (validate → convert → analyze) with plugin hooks
//! - [`builder`] - Indented code building (CodeBuilder, Indent)
//! - [`generation`] - Import collection
//! - [`language`] - Target language abstractions (LanguageCodegen, NamingConvention)

pub mod builder;
pub mod convert;
pub mod generation;
pub mod language;
pub mod pipeline;
