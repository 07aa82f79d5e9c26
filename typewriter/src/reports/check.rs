//! Check command report data structures.

use typewriter_codegen::pipeline::{Diagnostic, Severity};

use super::{
    describe,
    output::{Output, Report},
};

/// Report data from checking schemas.
#[derive(Debug)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

/// Check result for one input.
#[derive(Debug)]
pub struct CheckEntry {
    /// Schema path, or `<stdin>`.
    pub source: String,
    pub outcome: CheckOutcome,
}

#[derive(Debug)]
pub enum CheckOutcome {
    /// The schema loaded; lints ran.
    Checked {
        diagnostics: Vec<Diagnostic>,
        counts: TypeCounts,
    },
    /// The schema could not be loaded.
    Failed(String),
}

/// Number of schema types per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub objects: usize,
    pub interfaces: usize,
    pub unions: usize,
    pub enums: usize,
    pub input_objects: usize,
    /// Custom scalars only.
    pub scalars: usize,
}

impl CheckReport {
    /// Whether every schema loaded without error diagnostics.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| match &entry.outcome {
            CheckOutcome::Checked { diagnostics, .. } => {
                !diagnostics.iter().any(|d| d.severity.is_error())
            }
            CheckOutcome::Failed(_) => false,
        })
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.warning("no schema files found");
            return;
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.newline();
            }

            match &entry.outcome {
                CheckOutcome::Failed(message) => {
                    out.error(&format!("{}: {}", entry.source, message));
                }
                CheckOutcome::Checked {
                    diagnostics,
                    counts,
                } => render_checked(out, &entry.source, diagnostics, counts),
            }
        }
    }
}

fn render_checked(out: &mut dyn Output, source: &str, diagnostics: &[Diagnostic], counts: &TypeCounts) {
    let mut valid = true;
    for diag in diagnostics {
        let message = format!("{}: {}", source, describe(diag));
        match diag.severity {
            Severity::Error => {
                valid = false;
                out.error(&message);
            }
            Severity::Warning => out.warning(&message),
            Severity::Info => out.preformatted(&format!("info: {}", message)),
        }
    }

    if !valid {
        return;
    }

    out.preformatted(&format!("✓ {} is valid", source));
    let rows = [
        ("objects", counts.objects),
        ("interfaces", counts.interfaces),
        ("unions", counts.unions),
        ("enums", counts.enums),
        ("input objects", counts.input_objects),
        ("custom scalars", counts.scalars),
    ];
    for (kind, count) in rows {
        out.key_value_indented(kind, &count.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_valid_schema_with_counts() {
        let report = CheckReport {
            entries: vec![CheckEntry {
                source: "schema.graphqls".to_string(),
                outcome: CheckOutcome::Checked {
                    diagnostics: vec![Diagnostic::info("validate", "argument renders as `any`")],
                    counts: TypeCounts {
                        objects: 3,
                        ..Default::default()
                    },
                },
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(out.stdout[0], "info: schema.graphqls: argument renders as `any`");
        assert_eq!(out.stdout[1], "✓ schema.graphqls is valid");
        assert_eq!(out.stdout[2], "  objects: 3");
    }

    #[test]
    fn test_failed_schema() {
        let report = CheckReport {
            entries: vec![CheckEntry {
                source: "broken.graphqls".to_string(),
                outcome: CheckOutcome::Failed("syntax error".to_string()),
            }],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.stderr, vec!["error: broken.graphqls: syntax error"]);
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn test_error_diagnostic_is_invalid() {
        let report = CheckReport {
            entries: vec![CheckEntry {
                source: "s.graphqls".to_string(),
                outcome: CheckOutcome::Checked {
                    diagnostics: vec![Diagnostic::error("validate", "bad")],
                    counts: TypeCounts::default(),
                },
            }],
        };
        assert!(!report.is_valid());
    }
}
