//! Lint for attribute and block naming conventions.

use tfgen_spec::Specification;

use super::{super::Lint, visit_levels};
use crate::pipeline::Diagnostic;

/// Lint that errors on attribute or block names that aren't snake_case.
///
/// Names become schema keys and model tags, so they must match
/// `[a-z_][a-z0-9_]*`. Examples: `id`, `disk_size`, `_internal`
pub struct AttributeNamingLint;

impl Lint for AttributeNamingLint {
    fn name(&self) -> &'static str {
        "attribute-naming"
    }

    fn description(&self) -> &'static str {
        "Check attribute and block names are lowercase snake_case"
    }

    fn check(&self, specification: &Specification, diagnostics: &mut Vec<Diagnostic>) {
        visit_levels(specification, &mut |level| {
            let names = level
                .attributes
                .iter()
                .map(|a| a.name.as_str())
                .chain(level.blocks.iter().map(|b| b.name.as_str()));

            for name in names {
                if !is_schema_name(name) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "'{}' is not a valid name (use lowercase letters, digits and underscores, e.g. 'disk_size')",
                                name
                            ),
                        )
                        .at(level.child_path(name)),
                    );
                }
            }
        });
    }
}

fn is_schema_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_schema_name_valid() {
        assert!(is_schema_name("id"));
        assert!(is_schema_name("disk_size"));
        assert!(is_schema_name("_internal"));
        assert!(is_schema_name("v2"));
        assert!(is_schema_name("a__b"));
    }

    #[test]
    fn test_is_schema_name_invalid() {
        assert!(!is_schema_name("")); // empty
        assert!(!is_schema_name("Name")); // uppercase start
        assert!(!is_schema_name("diskSize")); // camelCase
        assert!(!is_schema_name("disk-size")); // kebab-case
        assert!(!is_schema_name("2fa")); // starts with digit
        assert!(!is_schema_name("disk size")); // contains space
    }

    #[test]
    fn test_invalid_nested_name() {
        let specification: Specification = r#"{
            "resources": [
                {
                    "name": "server",
                    "schema": {
                        "attributes": [ { "name": "id", "string": { "computed_optional_required": "computed" } } ],
                        "blocks": [
                            {
                                "name": "disk",
                                "list_nested": {
                                    "nested_object": {
                                        "attributes": [ { "name": "sizeGb", "int64": { "computed_optional_required": "required" } } ]
                                    }
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
        AttributeNamingLint.check(&specification, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("resource.server.disk.sizeGb")
        );
    }
}
