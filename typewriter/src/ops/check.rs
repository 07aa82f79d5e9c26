//! Check operation - schema loading and lints.

use rayon::prelude::*;
use typewriter_codegen::pipeline::Pipeline;
use typewriter_core::{BuiltinScalar, ScalarMap};
use typewriter_ir::{TypeDescriptor, TypeGraph};

use super::{Input, open_schema, render_schema_error};
use crate::reports::{CheckEntry, CheckOutcome, CheckReport, TypeCounts};

/// Execute the check operation.
///
/// Loads every input and runs the pipeline, returning its diagnostics and a
/// summary of the types found.
pub fn check(inputs: &[Input], scalars: &ScalarMap) -> CheckReport {
    let entries = inputs
        .par_iter()
        .map(|input| CheckEntry {
            source: input.to_string(),
            outcome: check_one(input, scalars).unwrap_or_else(CheckOutcome::Failed),
        })
        .collect();

    CheckReport { entries }
}

fn check_one(input: &Input, scalars: &ScalarMap) -> Result<CheckOutcome, String> {
    let _span = tracing::info_span!("check", source = %input).entered();

    let schema = open_schema(input)?;
    let graph = schema.load().map_err(render_schema_error)?;
    let counts = count_types(&graph);

    let ctx = Pipeline::new()
        .run(graph, scalars.clone())
        .map_err(|e| format!("{:#}", e))?;

    Ok(CheckOutcome::Checked {
        diagnostics: ctx.diagnostics,
        counts,
    })
}

/// Count the schema's own types. Built-in scalars are left out.
pub fn count_types(graph: &TypeGraph) -> TypeCounts {
    let mut counts = TypeCounts::default();
    for ty in graph.types() {
        match ty {
            TypeDescriptor::Scalar(scalar) => {
                if BuiltinScalar::from_name(&scalar.name).is_none() {
                    counts.scalars += 1;
                }
            }
            TypeDescriptor::Object(_) => counts.objects += 1,
            TypeDescriptor::Interface(_) => counts.interfaces += 1,
            TypeDescriptor::Union(_) => counts.unions += 1,
            TypeDescriptor::Enum(_) => counts.enums += 1,
            TypeDescriptor::InputObject(_) => counts.input_objects += 1,
        }
    }
    counts
}
