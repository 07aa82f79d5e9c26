//! Shared code generation utilities for the GraphQL typewriter.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `typewriter-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Template composition ([`compose`](builder::compose), [`source!`])
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)
//! - [`pipeline`] - Compilation phases, lints and diagnostics

pub mod builder;
pub mod language;
pub mod pipeline;
