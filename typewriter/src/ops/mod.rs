//! Core operations.
//!
//! This module contains the business logic for typewriter commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod inputs;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use inputs::Input;

use std::io;

use typewriter_schema::SchemaFile;

/// Name reported for schemas read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Read the schema for an input. Errors are rendered for the terminal.
fn open_schema(input: &Input) -> Result<SchemaFile, String> {
    match input {
        Input::Stdin => io::read_to_string(io::stdin())
            .map(|src| SchemaFile::from_source(src, STDIN_NAME))
            .map_err(|e| format!("failed to read stdin: {}", e)),
        Input::File(path) => SchemaFile::open(path).map_err(render_schema_error),
    }
}

/// Render a schema error as a miette report, the way the terminal shows it.
fn render_schema_error(error: Box<typewriter_schema::Error>) -> String {
    format!("{:?}", miette::Report::new(*error))
}
