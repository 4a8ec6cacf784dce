//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

/// Trait for target code generators.
///
/// Implement this trait to emit provider schema code for a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed or that did not exist yet
    pub written: Vec<String>,
    /// Files that already had the generated content
    pub unchanged: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
