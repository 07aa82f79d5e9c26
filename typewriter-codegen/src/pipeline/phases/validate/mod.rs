//! Validate phase - runs lints on the type graph.
//!
//! The graph itself comes from a validated schema and is trusted. Lints only
//! point out places where the generated declarations lose type information.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{OrphanArgumentsLint, UncheckedArgumentLint, UnmappedScalarLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the graph using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(UnmappedScalarLint),
                Box::new(UncheckedArgumentLint),
                Box::new(OrphanArgumentsLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Find places where the generated types degrade"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "running lint");
            lint.check(&ctx.graph, &ctx.scalars, &mut ctx.diagnostics);
        }

        // Warnings and infos never stop generation
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
