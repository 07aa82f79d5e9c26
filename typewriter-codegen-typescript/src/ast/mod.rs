//! TypeScript AST builders for declarations.
//!
//! These provide a small, high-level API for the TypeScript syntax the
//! renderer emits, rendered through the indentation-aware [`source!`]
//! template composer.
//!
//! [`source!`]: typewriter_codegen::source

mod alias;
mod comment;
mod interface;

pub use alias::TypeAlias;
pub use comment::doc_comment;
pub use interface::{Interface, Member};
