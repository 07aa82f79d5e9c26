//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the graph and collects diagnostics

mod validate;

pub use validate::{
    Lint, LintInfo, OrphanArgumentsLint, UncheckedArgumentLint, UnmappedScalarLint, ValidatePhase,
};
