//! Diff operation - structural comparison of two specifications.

use std::path::Path;

use tfgen_codegen::convert::convert_specification;
use tfgen_ir::diff_forests;
use tfgen_spec::Specification;

use crate::reports::DiffReport;

/// Convert both specifications and compare the resulting schemas. Roots that
/// fail to convert on either side are reported and left out of the comparison.
pub fn diff(
    left: &Specification,
    right: &Specification,
    left_path: &Path,
    right_path: &Path,
) -> DiffReport {
    let left_outcome = convert_specification(left);
    let right_outcome = convert_specification(right);

    let failures = left_outcome
        .failures
        .iter()
        .map(|f| format!("{}: {}", left_path.display(), f))
        .chain(
            right_outcome
                .failures
                .iter()
                .map(|f| format!("{}: {}", right_path.display(), f)),
        )
        .collect();

    let differences = diff_forests(&left_outcome.schemas, &right_outcome.schemas)
        .iter()
        .map(ToString::to_string)
        .collect();

    DiffReport {
        left: left_path.to_path_buf(),
        right: right_path.to_path_buf(),
        failures,
        differences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specification(presence: &str) -> Specification {
        format!(
            r#"{{
                "provider": {{ "name": "example" }},
                "resources": [
                    {{
                        "name": "server",
                        "schema": {{
                            "attributes": [
                                {{ "name": "id", "string": {{ "computed_optional_required": "{presence}" }} }}
                            ]
                        }}
                    }}
                ]
            }}"#
        )
        .parse()
        .unwrap()
    }

    #[test]
    fn test_identical_specifications() {
        let report = diff(
            &specification("computed"),
            &specification("computed"),
            Path::new("a.json"),
            Path::new("b.json"),
        );
        assert!(report.is_identical());
    }

    #[test]
    fn test_changed_presence() {
        let report = diff(
            &specification("computed"),
            &specification("required"),
            Path::new("a.json"),
            Path::new("b.json"),
        );

        assert!(!report.is_identical());
        assert_eq!(report.differences.len(), 1);
        assert!(report.differences[0].starts_with("resource.server.id"));
    }
}
