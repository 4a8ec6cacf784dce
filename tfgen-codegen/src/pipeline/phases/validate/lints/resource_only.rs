//! Lint for resource-only settings used inside data sources.

use tfgen_spec::{RootKind, Specification};

use super::{super::Lint, visit_levels};
use crate::pipeline::Diagnostic;

/// Lint that errors on plan modifiers or defaults inside a data source.
///
/// The data source schema package has neither, so the generated file would
/// not compile.
pub struct ResourceOnlyLint;

impl Lint for ResourceOnlyLint {
    fn name(&self) -> &'static str {
        "resource-only"
    }

    fn description(&self) -> &'static str {
        "Reject plan modifiers and defaults in data source schemas"
    }

    fn check(&self, specification: &Specification, diagnostics: &mut Vec<Diagnostic>) {
        visit_levels(specification, &mut |level| {
            if level.kind != RootKind::DataSource {
                return;
            }

            for attribute in level.attributes {
                if attribute
                    .behavior()
                    .is_some_and(|b| !b.plan_modifiers.is_empty())
                {
                    diagnostics.push(unsupported(level.child_path(&attribute.name), "plan modifiers"));
                }
                if attribute.has_default() {
                    diagnostics.push(unsupported(level.child_path(&attribute.name), "a default"));
                }
            }

            for block in level.blocks {
                if block.behavior().is_some_and(|b| !b.plan_modifiers.is_empty()) {
                    diagnostics.push(unsupported(level.child_path(&block.name), "plan modifiers"));
                }
            }
        });
    }
}

fn unsupported(path: String, what: &str) -> Diagnostic {
    Diagnostic::error(
        "validate",
        format!("data source schemas cannot declare {}", what),
    )
    .at(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "attributes": [
            {
                "name": "id",
                "string": {
                    "computed_optional_required": "computed",
                    "plan_modifiers": [ { "custom": { "schema_definition": "stringplanmodifier.UseStateForUnknown()" } } ],
                    "default": { "static": "x" }
                }
            }
        ]
    }"#;

    fn check(target: &str) -> Vec<Diagnostic> {
        let specification: Specification =
            format!(r#"{{ "{target}": [ {{ "name": "thing", "schema": {BODY} }} ] }}"#)
                .parse()
                .unwrap();

        let mut diagnostics = Vec::new();
        ResourceOnlyLint.check(&specification, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_data_source_rejects_plan_modifiers_and_defaults() {
        let diagnostics = check("datasources");

        let messages: Vec<&str> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "data source schemas cannot declare plan modifiers",
                "data source schemas cannot declare a default",
            ]
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("datasource.thing.id"));
    }

    #[test]
    fn test_resource_allows_them() {
        assert!(check("resources").is_empty());
    }
}
