//! Convert phase - turns every root of the specification into IR.

use eyre::Result;

use crate::{
    convert::convert_specification,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that converts the specification into the IR forest.
///
/// Roots are converted independently. A root that fails is kept in
/// `ctx.failures` and reported as an error diagnostic; the remaining roots
/// still reach `ctx.schemas`.
pub struct ConvertPhase;

impl Phase for ConvertPhase {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn description(&self) -> &'static str {
        "Convert specification roots to IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let outcome = convert_specification(&ctx.specification);

        for failure in &outcome.failures {
            ctx.add_diagnostic(
                Diagnostic::error(self.name(), failure.error.to_string())
                    .at(format!("{}.{}", failure.target, failure.name)),
            );
        }

        tracing::debug!(
            converted = outcome.schemas.len(),
            failed = outcome.failures.len(),
            "converted specification"
        );
        ctx.schemas = Some(outcome.schemas);
        ctx.failures = outcome.failures;
        Ok(())
    }
}
