//! Lint for duplicate sibling names.

use std::collections::HashMap;

use tfgen_spec::Specification;

use super::{super::Lint, visit_levels};
use crate::pipeline::Diagnostic;

/// Lint that errors when two siblings share a name.
///
/// Attributes and blocks live in one namespace per level, so an attribute
/// and a block with the same name also conflict. Conversion would otherwise
/// keep only the later entry.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn description(&self) -> &'static str {
        "Detect attributes and blocks sharing a name at one level"
    }

    fn check(&self, specification: &Specification, diagnostics: &mut Vec<Diagnostic>) {
        visit_levels(specification, &mut |level| {
            let mut seen: HashMap<&str, &'static str> = HashMap::new();
            let names = level
                .attributes
                .iter()
                .map(|a| (a.name.as_str(), "attribute"))
                .chain(level.blocks.iter().map(|b| (b.name.as_str(), "block")));

            for (name, what) in names {
                if let Some(first) = seen.get(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!("duplicate {} '{}' (conflicts with {} of the same name)", what, name, first),
                        )
                        .at(level.child_path(name)),
                    );
                } else {
                    seen.insert(name, what);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_block_conflict() {
        let specification: Specification = r#"{
            "datasources": [
                {
                    "name": "image",
                    "schema": {
                        "attributes": [ { "name": "filter", "string": { "computed_optional_required": "optional" } } ],
                        "blocks": [ { "name": "filter", "single_nested": {} } ]
                    }
                }
            ]
        }"#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(&specification, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "duplicate block 'filter' (conflicts with attribute of the same name)"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("datasource.image.filter"));
    }

    #[test]
    fn test_same_name_at_different_levels() {
        let specification: Specification = r#"{
            "resources": [
                {
                    "name": "server",
                    "schema": {
                        "attributes": [ { "name": "name", "string": { "computed_optional_required": "required" } } ],
                        "blocks": [
                            {
                                "name": "disk",
                                "single_nested": {
                                    "attributes": [ { "name": "name", "string": { "computed_optional_required": "required" } } ]
                                }
                            }
                        ]
                    }
                }
            ]
        }"#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(&specification, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
