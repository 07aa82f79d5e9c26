//! Whole-file TypeScript declaration renderer.

use typewriter_codegen::language::TypeMapper;
use typewriter_ir::TypeGraph;

use crate::{
    declarations::{SECTIONS, preamble},
    ts_type::TypeResolver,
};

/// Renders one TypeGraph into one declaration file.
///
/// Rendering is a single pass over the borrowed graph and cannot fail.
pub struct Renderer<'a> {
    graph: &'a TypeGraph,
    resolver: TypeResolver<'a>,
}

impl<'a> Renderer<'a> {
    pub fn new(graph: &'a TypeGraph, mapper: &'a dyn TypeMapper) -> Self {
        Self {
            graph,
            resolver: TypeResolver::new(mapper),
        }
    }

    /// Render the complete file: banner, preamble, then every non-empty
    /// section, separated by blank lines. There is no trailing newline.
    pub fn render(&self) -> String {
        let mut blocks = vec![preamble::BANNER.to_string()];
        blocks.extend(preamble::render());

        for section in SECTIONS {
            let declarations = (section.render)(self.graph, &self.resolver);
            tracing::debug!(
                section = section.name,
                declarations = declarations.len(),
                "rendered section"
            );
            if !declarations.is_empty() {
                blocks.push(declarations.join("\n\n"));
            }
        }

        blocks.join("\n\n")
    }
}
