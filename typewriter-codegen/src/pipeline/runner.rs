//! Pipeline orchestrator.

use eyre::Result;
use typewriter_core::ScalarMap;
use typewriter_ir::TypeGraph;

use super::{CompilationContext, Phase, phases::ValidatePhase};

/// The compilation pipeline orchestrator.
///
/// Runs the validate phase followed by any user phases, each inside its own
/// tracing span.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(graph, scalars)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the built-in validate phase, e.g. to change its lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after validation.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a loaded graph.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. The validate phase fails
    /// when a lint reports an error.
    pub fn run(&self, graph: TypeGraph, scalars: ScalarMap) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(graph, scalars);

        self.run_phase(&self.validate, &mut ctx)?;
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let info = phase.info();
        let _span = tracing::debug_span!("phase", name = info.name).entered();
        tracing::debug!(description = info.description, "running phase");

        let before = ctx.diagnostics.len();
        phase.run(ctx)?;
        tracing::debug!(
            diagnostics = ctx.diagnostics.len() - before,
            "phase finished"
        );

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use typewriter_ir::{Field, ObjectType, RootTypes, TypeDescriptor, TypeRef};

    use super::*;

    struct CountingPhase(Arc<AtomicUsize>);

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "Counts how often it runs"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            ctx.add_info("counting", "ran");
            Ok(())
        }
    }

    fn make_graph(scalar: &str) -> TypeGraph {
        TypeGraph::new(
            RootTypes::new("Query"),
            vec![TypeDescriptor::Object(ObjectType {
                name: "Query".to_string(),
                description: None,
                fields: vec![Field::new("value", TypeRef::scalar(scalar))],
                interfaces: Vec::new(),
            })],
        )
    }

    #[test]
    fn test_pipeline_runs_user_phases_after_validate() {
        let count = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase(count.clone()));

        let ctx = pipeline
            .run(make_graph("JSON"), ScalarMap::new())
            .expect("pipeline should succeed");

        assert_eq!(count.load(Ordering::SeqCst), 1);
        // The unmapped-scalar warning comes from validation, before the user phase
        assert!(ctx.diagnostics[0].severity.is_warning());
        assert_eq!(ctx.diagnostics.last().unwrap().phase, "counting");
    }

    #[test]
    fn test_pipeline_uses_configured_scalars() {
        let ctx = Pipeline::new()
            .run(make_graph("JSON"), ScalarMap::new().with("JSON", "unknown"))
            .expect("pipeline should succeed");

        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_pipeline_with_empty_validate_phase() {
        let ctx = Pipeline::new()
            .validate(ValidatePhase::empty())
            .run(make_graph("JSON"), ScalarMap::new())
            .expect("pipeline should succeed");

        assert!(ctx.diagnostics.is_empty());
    }
}
