//! Generate operation - one declaration file per schema.

use std::path::Path;

use rayon::prelude::*;
use typewriter_codegen::pipeline::{Diagnostic, Pipeline};
use typewriter_codegen_typescript::{Generator, LanguageCodegen};
use typewriter_core::{Overwrite, ScalarMap, WriteResult};

use super::{Input, open_schema, render_schema_error};
use crate::reports::{GenerateReport, InputResult, Outcome};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Target types for custom scalars.
    pub scalars: &'a ScalarMap,
    /// Whether identical files are rewritten.
    pub overwrite: Overwrite,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Write here instead of next to the schema. Only valid for one input.
    pub output: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Inputs are independent and processed in parallel. A failing input does
/// not stop the others; failures are collected in the report.
pub fn generate(inputs: &[Input], opts: &GenerateOptions<'_>) -> GenerateReport {
    let results = inputs
        .par_iter()
        .map(|input| generate_one(input, opts))
        .collect();

    GenerateReport {
        results,
        dry_run: opts.dry_run,
        summary: inputs.iter().any(|input| matches!(input, Input::File(_))),
    }
}

fn generate_one(input: &Input, opts: &GenerateOptions<'_>) -> InputResult {
    let _span = tracing::info_span!("generate", source = %input).entered();

    let mut warnings = Vec::new();
    let outcome = run(input, opts, &mut warnings).unwrap_or_else(Outcome::Failed);

    InputResult {
        source: input.to_string(),
        warnings,
        outcome,
    }
}

fn run(
    input: &Input,
    opts: &GenerateOptions<'_>,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Outcome, String> {
    let schema = open_schema(input)?;
    let graph = schema.load().map_err(render_schema_error)?;

    let ctx = Pipeline::new()
        .run(graph, opts.scalars.clone())
        .map_err(|e| format!("{:#}", e))?;
    warnings.extend(ctx.warnings().cloned());

    let generator = Generator::from_context(ctx);
    let target = match (opts.output, input) {
        (Some(output), _) => output.to_path_buf(),
        (None, Input::File(path)) => generator.target_path(path),
        (None, Input::Stdin) => return Ok(Outcome::Printed(generator.render())),
    };

    if opts.dry_run {
        let file = generator.preview(&target);
        return Ok(Outcome::Preview {
            target,
            content: file.content().to_string(),
        });
    }

    let written = generator
        .generate(&target, opts.overwrite)
        .map_err(|e| format!("{:#}", e))?;
    tracing::info!(target = %target.display(), ?written, "done");

    Ok(match written {
        WriteResult::Written => Outcome::Written(target),
        WriteResult::Unchanged => Outcome::Unchanged(target),
    })
}
