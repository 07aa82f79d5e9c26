//! TypeScript declaration generator.

use typewriter_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use typewriter_core::ScalarMap;
use typewriter_ir::TypeGraph;

use crate::{Renderer, TypeScriptTypeMapper};

/// TypeScript generator that produces resolver declarations for one schema.
pub struct Generator {
    graph: TypeGraph,
    mapper: TypeScriptTypeMapper,
}

impl Generator {
    pub fn new(graph: TypeGraph, scalars: ScalarMap) -> Self {
        Self {
            graph,
            mapper: TypeScriptTypeMapper::new(scalars),
        }
    }

    /// Build a generator from a finished pipeline run.
    pub fn from_context(ctx: CompilationContext) -> Self {
        Self::new(ctx.graph, ctx.scalars)
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "types.ts"
    }

    fn render(&self) -> String {
        Renderer::new(&self.graph, &self.mapper).render()
    }
}
