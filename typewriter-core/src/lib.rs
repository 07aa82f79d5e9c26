//! Core utilities and types for the GraphQL typewriter.
//!
//! This crate provides fundamental types and utilities used across
//! the typewriter crates.

mod file;
mod scalar;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Scalar mapping
pub use scalar::{BuiltinScalar, ScalarMap};
