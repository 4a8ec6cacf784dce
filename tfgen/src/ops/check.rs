//! Check operation - lint and convert without generating.

use std::path::Path;

use eyre::Result;
use tfgen_codegen::pipeline::{
    CompilationContext, Phase, Severity,
    phases::{AnalyzePhase, ConvertPhase, ValidatePhase},
};
use tfgen_spec::Specification;

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the phases one by one so that lint diagnostics survive a failed
/// validation. Conversion only runs on a specification that passed the lints.
pub fn check(specification: Specification, spec_path: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(specification);

    if ValidatePhase::new().run(&mut ctx).is_ok() {
        ConvertPhase.run(&mut ctx)?;
        AnalyzePhase.run(&mut ctx)?;
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diagnostic in &ctx.diagnostics {
        let message = describe(diagnostic);
        match diagnostic.severity {
            Severity::Error => errors.push(message),
            Severity::Warning => warnings.push(message),
            Severity::Info => infos.push(message),
        }
    }

    Ok(CheckReport {
        spec_path: spec_path.to_path_buf(),
        errors,
        warnings,
        infos,
        summaries: ctx.summaries.take().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(document: &str) -> CheckReport {
        check(document.parse().unwrap(), Path::new("spec.json")).unwrap()
    }

    #[test]
    fn test_valid_specification() {
        let report = run(r#"{
            "provider": { "name": "example" },
            "resources": [
                {
                    "name": "server",
                    "schema": {
                        "attributes": [
                            { "name": "id", "string": { "computed_optional_required": "computed" } }
                        ]
                    }
                }
            ]
        }"#);

        assert!(report.is_valid());
        assert_eq!(report.summaries.len(), 1);
        assert_eq!(report.summaries[0].attributes, 1);
    }

    #[test]
    fn test_lint_errors_are_reported() {
        let report = run(r#"{
            "provider": { "name": "example" },
            "datasources": [
                {
                    "name": "image",
                    "schema": {
                        "description": " ",
                        "attributes": [
                            { "name": "Bad-Name", "string": { "computed_optional_required": "computed" } }
                        ]
                    }
                }
            ]
        }"#);

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Bad-Name"));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.summaries.is_empty());
    }

    #[test]
    fn test_conversion_failures_are_errors() {
        let report = run(r#"{
            "provider": { "name": "example" },
            "resources": [ { "name": "missing" } ]
        }"#);

        assert!(!report.is_valid());
        assert!(report.errors[0].starts_with("Schema is nil"));
        assert!(report.errors[0].ends_with("--> resource.missing"));
    }
}
