//! Code generation building blocks.
//!
//! - [`compose`] - Indentation-aware substitution of slots into literal text
//! - [`Slot`] - A value for one template hole
//! - [`source!`](crate::source) - Template strings with `${}` holes

mod template;

pub use template::{Slot, compose};
