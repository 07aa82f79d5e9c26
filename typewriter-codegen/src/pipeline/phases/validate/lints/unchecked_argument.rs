//! Lint for arguments rendered as `any`.

use typewriter_core::ScalarMap;
use typewriter_ir::TypeGraph;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes root-field arguments whose argument-object member is `any`.
///
/// Argument objects only type plain scalars (optionally non-null). Lists,
/// enums and input objects are emitted unchecked.
pub struct UncheckedArgumentLint;

impl Lint for UncheckedArgumentLint {
    fn name(&self) -> &'static str {
        "unchecked-argument"
    }

    fn description(&self) -> &'static str {
        "Root-field arguments that are not typed in argument objects"
    }

    fn check(&self, graph: &TypeGraph, _scalars: &ScalarMap, diagnostics: &mut Vec<Diagnostic>) {
        for root in graph.root_objects() {
            for field in &root.fields {
                for arg in field.args.iter().filter(|a| a.ty.plain_scalar().is_none()) {
                    diagnostics.push(
                        Diagnostic::info(
                            "validate",
                            format!(
                                "argument '{}' of type `{}` renders as `any`",
                                arg.name, arg.ty
                            ),
                        )
                        .at(format!("{}.{}({})", root.name, field.name, arg.name)),
                    );
                }
            }
        }
    }
}
