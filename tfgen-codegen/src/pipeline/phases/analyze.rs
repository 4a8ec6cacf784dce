//! Analyze phase - computes per-root summaries from IR.

use eyre::Result;

use crate::pipeline::{CompilationContext, Phase, SchemaSummary};

/// Phase that summarizes each converted root.
///
/// This phase must run after `ConvertPhase` as it requires the IR forest.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Compute per-root summaries from IR"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let schemas = ctx.schemas.as_ref().ok_or_else(|| {
            eyre::eyre!("schemas not set - AnalyzePhase must run after ConvertPhase")
        })?;

        ctx.summaries = Some(schemas.iter().map(SchemaSummary::from_schema).collect());
        Ok(())
    }
}
