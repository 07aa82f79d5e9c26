//! Compilation pipeline for code generation.
//!
//! The [`Pipeline`] runs phases over a [`CompilationContext`] holding the
//! loaded TypeGraph and the scalar configuration. Phases only inspect the
//! graph and record [`Diagnostic`]s; the graph is never modified.
//!
//! # Example
//!
//! ```ignore
//! use typewriter_codegen::pipeline::{Pipeline, Severity};
//!
//! let ctx = Pipeline::new().run(graph, scalars)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
