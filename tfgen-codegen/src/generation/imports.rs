//! Import collection utilities.

use indexmap::IndexSet;
use tfgen_ir::Import;

/// Tracks imports and deduplicates them.
///
/// Maintains insertion order for deterministic output: the first time an
/// import is added fixes its position.
///
/// # Example
///
/// ```
/// use tfgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_path("github.com/hashicorp/terraform-plugin-framework/types");
/// imports.add_path("example.com/custom");
/// imports.add_path("github.com/hashicorp/terraform-plugin-framework/types");
///
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    imports: IndexSet<Import>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. Returns false if it was already present.
    pub fn add(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    /// Add an unaliased import by path.
    pub fn add_path(&mut self, path: &str) -> bool {
        self.add(Import::new(path))
    }

    /// Add every import from an iterator, skipping those with empty paths.
    pub fn extend<'a>(&mut self, imports: impl IntoIterator<Item = &'a Import>) {
        for import in imports {
            if !import.path.is_empty() {
                self.add(import.clone());
            }
        }
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn into_vec(self) -> Vec<Import> {
        self.imports.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_dedup() {
        let mut imports = ImportCollector::new();
        assert!(imports.add_path("b"));
        assert!(imports.add_path("a"));
        assert!(!imports.add_path("b"));

        let paths: Vec<&str> = imports.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["b", "a"]);
    }

    #[test]
    fn test_alias_is_distinct() {
        let mut imports = ImportCollector::new();
        imports.add_path("example.com/x");
        imports.add(Import::aliased("example.com/x", "x2"));

        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_extend_skips_empty_paths() {
        let mut imports = ImportCollector::new();
        imports.extend(&[Import::new(""), Import::new("c")]);
        assert_eq!(imports.into_vec(), vec![Import::new("c")]);
    }
}
