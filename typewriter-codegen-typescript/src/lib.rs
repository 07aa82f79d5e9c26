//! TypeScript declaration generator for the GraphQL typewriter.
//!
//! This crate renders a [`TypeGraph`](typewriter_ir::TypeGraph) into a
//! TypeScript file declaring one interface per object type, with every field
//! typed as a value, a promise or a resolver function.
//!
//! # Usage
//!
//! ```ignore
//! use typewriter_codegen_typescript::{Generator, LanguageCodegen};
//! use typewriter_core::Overwrite;
//! use typewriter_schema::SchemaFile;
//!
//! let schema = SchemaFile::open("schema.graphqls")?;
//! let generator = Generator::new(schema.load()?, Default::default());
//!
//! // Render without writing
//! let text = generator.render();
//!
//! // Write schema.graphqls.types.ts, skipping identical content
//! let target = generator.target_path("schema.graphqls".as_ref());
//! generator.generate(&target, Overwrite::IfChanged)?;
//! ```
//!
//! # Generated Output
//!
//! After a fixed banner and the `GraphqlField` alias, sections follow in
//! this order; empty sections are left out:
//!
//! - Object types (`export interface Human<Ctx> extends Character<Ctx>`)
//! - Argument objects for root fields (`heroArgs`)
//! - Input objects
//! - Enums, as a literal union plus a value table
//! - Unions
//! - Interfaces
//! - `defaultResolvers`, resolving unions and interfaces via `__typename`

mod generator;
mod renderer;
mod ts_type;
mod type_mapper;

pub mod ast;
pub mod declarations;

pub use generator::Generator;
pub use renderer::Renderer;
pub use ts_type::{CONTEXT_PARAM, TsType, TypeResolver};
pub use type_mapper::TypeScriptTypeMapper;
pub use typewriter_codegen::language::LanguageCodegen;
