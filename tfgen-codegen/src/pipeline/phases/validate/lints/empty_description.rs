//! Lint for blank descriptions.

use tfgen_spec::Specification;

use super::{super::Lint, visit_levels};
use crate::pipeline::Diagnostic;

/// Lint that warns about descriptions that are present but blank.
///
/// A blank description still renders `Description: ""` in the generated
/// schema, which shows up as an empty entry in provider documentation.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about blank descriptions"
    }

    fn check(&self, specification: &Specification, diagnostics: &mut Vec<Diagnostic>) {
        for root in specification.roots() {
            if root.schema.is_some_and(|s| is_blank(&s.description)) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} '{}' has an empty description", root.kind, root.name),
                    )
                    .at(format!("{}.{}", root.kind, root.name)),
                );
            }
        }

        visit_levels(specification, &mut |level| {
            let attributes = level
                .attributes
                .iter()
                .map(|a| (a.name.as_str(), a.behavior().map(|b| &b.description)));
            let blocks = level
                .blocks
                .iter()
                .map(|b| (b.name.as_str(), b.behavior().map(|b| &b.description)));

            for (name, description) in attributes.chain(blocks) {
                if description.is_some_and(is_blank) {
                    diagnostics.push(
                        Diagnostic::warning("validate", format!("'{}' has an empty description", name))
                            .at(level.child_path(name)),
                    );
                }
            }
        });
    }
}

fn is_blank(description: &Option<String>) -> bool {
    description.as_deref().is_some_and(|d| d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description() {
        let specification: Specification = r#"{
            "resources": [
                {
                    "name": "server",
                    "schema": {
                        "description": "  ",
                        "attributes": [
                            { "name": "id", "string": { "computed_optional_required": "computed", "description": "" } },
                            { "name": "name", "string": { "computed_optional_required": "required" } }
                        ]
                    }
                }
            ]
        }"#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&specification, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
        assert_eq!(diagnostics[0].location.as_deref(), Some("resource.server"));
        assert_eq!(diagnostics[1].location.as_deref(), Some("resource.server.id"));
    }

    #[test]
    fn test_missing_description_is_fine() {
        let specification: Specification = r#"{
            "resources": [ { "name": "server", "schema": {} } ]
        }"#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        EmptyDescriptionLint.check(&specification, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
