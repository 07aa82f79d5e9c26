//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Trait for mapping GraphQL scalars to language types

mod traits;

pub use traits::{LanguageCodegen, TypeMapper};
