//! Lint for argument types that are referenced but never declared.

use typewriter_core::ScalarMap;
use typewriter_ir::TypeGraph;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about fields with arguments outside the root types.
///
/// Their members reference a `<Field>Args` type, but argument objects are
/// only declared for root operation types.
pub struct OrphanArgumentsLint;

impl Lint for OrphanArgumentsLint {
    fn name(&self) -> &'static str {
        "orphan-arguments"
    }

    fn description(&self) -> &'static str {
        "Non-root fields whose argument type is not declared"
    }

    fn check(&self, graph: &TypeGraph, _scalars: &ScalarMap, diagnostics: &mut Vec<Diagnostic>) {
        let roots = graph.roots();
        for (parent, field) in graph.all_fields() {
            if field.has_args() && !roots.contains(parent) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "field '{}' has arguments, but argument objects are only declared for root types",
                            field.name
                        ),
                    )
                    .at(format!("{parent}.{}", field.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::fixtures;

    #[test]
    fn test_non_root_field_with_arguments() {
        let mut diagnostics = Vec::new();
        OrphanArgumentsLint.check(&fixtures::graph(), &ScalarMap::new(), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Character.friends"));
        assert!(diagnostics[0].severity.is_warning());
    }
}
