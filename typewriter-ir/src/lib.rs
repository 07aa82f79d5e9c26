//! Type graph representation for the GraphQL typewriter.
//!
//! This crate provides the data model shared by every stage of the
//! typewriter: the set of named types reachable from a schema's root
//! operation types, exactly as an introspection query reports them.
//!
//! # Architecture
//!
//! ```text
//! schema.graphqls / introspection.json → typewriter-schema (loading)
//!     → typewriter-ir (TypeGraph) → typewriter-codegen (pipeline, rendering)
//! ```
//!
//! The types are designed to be:
//! - Immutable once built (the renderer only ever borrows them)
//! - Target-language agnostic
//! - Free of any schema parsing or validation logic

mod graph;
mod type_ref;
mod types;

pub use graph::{INTROSPECTION_TYPES, RootTypes, TypeGraph, is_introspection_type};
pub use type_ref::TypeRef;
pub use types::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, ObjectType, ScalarType,
    TypeDescriptor, TypeKind, UnionType,
};
