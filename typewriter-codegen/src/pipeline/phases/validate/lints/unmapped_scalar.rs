//! Lint for scalars without a target type.

use typewriter_core::ScalarMap;
use typewriter_ir::{TypeGraph, TypeKind, TypeRef};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about scalars that are neither built-in nor configured.
///
/// Such scalars render as `any`. Field types, root-field arguments and input
/// fields are checked; arguments of other fields are never rendered.
pub struct UnmappedScalarLint;

impl Lint for UnmappedScalarLint {
    fn name(&self) -> &'static str {
        "unmapped-scalar"
    }

    fn description(&self) -> &'static str {
        "Scalars without a configured target type"
    }

    fn check(&self, graph: &TypeGraph, scalars: &ScalarMap, diagnostics: &mut Vec<Diagnostic>) {
        let mut report = |ty: &TypeRef, location: String| {
            if let (name, TypeKind::Scalar) = ty.named_type() {
                if !scalars.covers(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!("scalar '{name}' has no target type and renders as `any`"),
                        )
                        .at(location),
                    );
                }
            }
        };

        for (parent, field) in graph.all_fields() {
            report(&field.ty, format!("{parent}.{}", field.name));
        }

        for root in graph.root_objects() {
            for field in &root.fields {
                for arg in &field.args {
                    report(&arg.ty, format!("{}.{}({})", root.name, field.name, arg.name));
                }
            }
        }

        for input in graph.input_objects() {
            for field in &input.fields {
                report(&field.ty, format!("{}.{}", input.name, field.name));
            }
        }
    }
}
