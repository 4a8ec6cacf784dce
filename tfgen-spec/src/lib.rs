//! Provider code specification model for tfgen.
//!
//! The types in this crate mirror the on-disk specification document one to
//! one. They are deliberately permissive: every kind-specific body is an
//! `Option`, and nothing here checks that exactly one of them is populated.
//! That check belongs to the converter in `tfgen-codegen`.
//!
//! ```text
//! spec.json / spec.toml → tfgen-spec (loading) → tfgen-ir (typed tree) → codegen
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod attribute;
mod block;
mod common;
mod element;
mod error;
mod parse;
mod specification;

pub use attribute::*;
pub use block::*;
pub use common::*;
pub use element::*;
pub use error::{Error, Result};
pub use parse::Format;
pub use specification::{DataSource, Provider, Resource, Root, RootKind, Schema, Specification};
