//! Pipeline orchestrator.

use eyre::Result;
use tfgen_spec::Specification;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ConvertPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline manages the execution of compilation phases and plugin hooks.
/// It runs built-in phases (validate, convert, analyze) followed by any user
/// phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(specification)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to run without lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a specification.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the specification, collects diagnostics
    /// 2. ConvertPhase - converts each root to IR, recording failures
    /// 3. AnalyzePhase - summarizes the converted roots
    /// 4. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Conversion failures are
    /// not fatal; they are left in [`CompilationContext::failures`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&self, specification: Specification) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(specification);

        // Built-in phases in execution order
        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&ConvertPhase, &mut ctx)?;
        self.run_phase(&AnalyzePhase, &mut ctx)?;

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        tracing::debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase complete"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
