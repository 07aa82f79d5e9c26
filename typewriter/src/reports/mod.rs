//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckEntry, CheckOutcome, CheckReport, TypeCounts};
pub use generate::{GenerateReport, InputResult, Outcome};
pub use output::{Report, TerminalOutput};

use typewriter_codegen::pipeline::Diagnostic;

/// A diagnostic message followed by its location, if any.
fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
