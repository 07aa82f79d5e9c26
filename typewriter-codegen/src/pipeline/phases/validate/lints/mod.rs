//! Built-in lints.

mod orphan_arguments;
mod unchecked_argument;
mod unmapped_scalar;

pub use orphan_arguments::OrphanArgumentsLint;
pub use unchecked_argument::UncheckedArgumentLint;
pub use unmapped_scalar::UnmappedScalarLint;
