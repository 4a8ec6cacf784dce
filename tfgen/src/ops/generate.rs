//! Generate operation - Go code generation from a specification.

use std::path::Path;

use eyre::{Context, Result, bail};
use tfgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
use tfgen_codegen_go::{Generator, LanguageCodegen};
use tfgen_spec::Specification;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to generate the roots that converted when others failed.
    pub skip_invalid: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the specification and generates one Go file per
/// converted root.
#[tracing::instrument(level = "debug", skip_all, fields(output = %opts.output_dir.display()))]
pub fn generate(specification: Specification, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".tfgen/debug");

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let mut ctx = pipeline
        .run(specification)
        .wrap_err("Pipeline failed (run `tfgen check` for diagnostics)")?;

    let warnings: Vec<String> = ctx.warnings().map(|d| d.message.clone()).collect();
    let skipped: Vec<String> = ctx.failures.iter().map(ToString::to_string).collect();

    if !skipped.is_empty() && !opts.skip_invalid {
        bail!(
            "{} root(s) failed to convert:\n  {}",
            skipped.len(),
            skipped.join("\n  ")
        );
    }

    let schemas = ctx.take_schemas()?;
    let generator = Generator::new(&schemas);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        tracing::debug!(
            written = generated.written.len(),
            unchanged = generated.unchanged.len(),
            "generation complete"
        );

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            unchanged: generated.unchanged,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        warnings,
        skipped,
        roots: schemas.len(),
        result,
    })
}
