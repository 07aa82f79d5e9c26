//! Compilation context passed through pipeline phases.

use typewriter_core::ScalarMap;
use typewriter_ir::TypeGraph;

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The type graph being rendered.
    pub graph: TypeGraph,
    /// Configured target types for custom scalars.
    pub scalars: ScalarMap,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(graph: TypeGraph, scalars: ScalarMap) -> Self {
        Self {
            graph,
            scalars,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use typewriter_ir::RootTypes;

    use super::*;

    fn make_context() -> CompilationContext {
        CompilationContext::new(
            TypeGraph::new(RootTypes::new("Query"), Vec::new()),
            ScalarMap::new(),
        )
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.scalars.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_context_no_errors() {
        let mut ctx = make_context();

        ctx.add_warning("test", "just a warning");
        ctx.add_info("test", "just info");

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.diagnostics.len(), 2);
    }
}
