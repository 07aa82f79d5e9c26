//! Generate command report data structures.

use std::path::PathBuf;

use typewriter_codegen::pipeline::Diagnostic;

use super::{
    describe,
    output::{Output, Report},
};

/// Report data from declaration generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// One result per input, in input order.
    pub results: Vec<InputResult>,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Whether to print the summary (not when only stdout was written).
    pub summary: bool,
}

/// Result for one input.
#[derive(Debug)]
pub struct InputResult {
    /// Schema path, or `<stdin>`.
    pub source: String,
    /// Warnings from the pipeline.
    pub warnings: Vec<Diagnostic>,
    pub outcome: Outcome,
}

/// What happened to one input.
#[derive(Debug)]
pub enum Outcome {
    /// Declarations were written to disk.
    Written(PathBuf),
    /// The target already had identical content.
    Unchanged(PathBuf),
    /// Dry-run preview.
    Preview { target: PathBuf, content: String },
    /// Declarations rendered for stdout.
    Printed(String),
    /// The schema could not be loaded or generated.
    Failed(String),
}

impl GenerateReport {
    /// Number of inputs that failed.
    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed(_)))
            .count()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.results.is_empty() {
            out.warning("no schema files found");
            return;
        }

        for result in &self.results {
            for warning in &result.warnings {
                out.warning(&format!("{}: {}", result.source, describe(warning)));
            }

            match &result.outcome {
                Outcome::Written(target) => {
                    out.added_item(&format!("{} -> {}", result.source, target.display()))
                }
                Outcome::Unchanged(target) => out.unchanged_item(&format!(
                    "{} -> {} (unchanged)",
                    result.source,
                    target.display()
                )),
                Outcome::Preview { target, content } => {
                    out.divider(&target.display().to_string());
                    out.preformatted(content.trim_end());
                }
                Outcome::Printed(content) => out.preformatted(content),
                Outcome::Failed(message) => out.error(&format!("{}: {}", result.source, message)),
            }
        }

        if !self.summary {
            return;
        }

        if self.dry_run {
            let previews = self.count(|o| matches!(o, Outcome::Preview { .. }));
            out.divider("Summary");
            out.preformatted(&format!("{} files would be generated", previews));
        } else {
            out.newline();
            out.section("Summary");
            let written = self.count(|o| matches!(o, Outcome::Written(_)));
            let unchanged = self.count(|o| matches!(o, Outcome::Unchanged(_)));
            out.key_value_indented("written", &written.to_string());
            out.key_value_indented("unchanged", &unchanged.to_string());
            out.key_value_indented("failed", &self.failed().to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn result(source: &str, outcome: Outcome) -> InputResult {
        InputResult {
            source: source.to_string(),
            warnings: Vec::new(),
            outcome,
        }
    }

    #[test]
    fn test_written_and_failed() {
        let report = GenerateReport {
            results: vec![
                result("a.graphqls", Outcome::Written(PathBuf::from("a.graphqls.types.ts"))),
                result("b.graphqls", Outcome::Failed("boom".to_string())),
            ],
            dry_run: false,
            summary: true,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(report.failed(), 1);
        assert_eq!(out.stdout[0], "  + a.graphqls -> a.graphqls.types.ts");
        assert_eq!(out.stderr, vec!["error: b.graphqls: boom"]);
        assert!(out.stdout.contains(&"  failed: 1".to_string()));
    }

    #[test]
    fn test_stdin_only_prints_declarations() {
        let report = GenerateReport {
            results: vec![result("<stdin>", Outcome::Printed("type ID = string".to_string()))],
            dry_run: false,
            summary: false,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout, vec!["type ID = string"]);
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_warnings_carry_location() {
        let mut input = result("a.graphqls", Outcome::Unchanged(PathBuf::from("a.types.ts")));
        input.warnings.push(
            Diagnostic::warning("validate", "scalar 'JSON' has no target type")
                .at("Query.payload"),
        );
        let report = GenerateReport {
            results: vec![input],
            dry_run: false,
            summary: true,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stderr,
            vec!["warning: a.graphqls: scalar 'JSON' has no target type\n  --> Query.payload"]
        );
        assert_eq!(out.stdout[0], "  = a.graphqls -> a.types.ts (unchanged)");
    }

    #[test]
    fn test_dry_run_summary() {
        let report = GenerateReport {
            results: vec![result(
                "a.graphqls",
                Outcome::Preview {
                    target: PathBuf::from("a.graphqls.types.ts"),
                    content: "type ID = string\n".to_string(),
                },
            )],
            dry_run: true,
            summary: true,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "── a.graphqls.types.ts ──",
                "type ID = string",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
