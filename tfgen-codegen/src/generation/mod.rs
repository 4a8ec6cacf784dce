//! Output management helpers shared by target generators.

mod imports;

pub use imports::ImportCollector;
