//! Producers of the TypeGraph and the project configuration.
//!
//! Schemas come either as SDL, parsed and validated by `apollo-compiler`, or
//! as the JSON result of an introspection query. Both end up as the same
//! [`TypeGraph`](typewriter_ir::TypeGraph).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod introspection;
mod sdl;

pub use config::{Config, GenerateConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{SchemaFile, SchemaFormat};
