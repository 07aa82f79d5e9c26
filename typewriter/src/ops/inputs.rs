//! Resolving command-line inputs to schema sources.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use glob::Pattern;

use super::STDIN_NAME;

/// Pattern used when no inputs are given.
pub const DEFAULT_PATTERN: &str = "**/*.graphqls";

/// Exclusion used when neither the command line nor the config names any.
pub const DEFAULT_EXCLUDE: &str = "node_modules/**";

/// Input argument that reads the schema from stdin.
pub const STDIN_ARG: &str = "-";

/// One schema to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// SDL read from stdin; output goes to stdout.
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "{}", STDIN_NAME),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Expand paths and glob patterns into inputs, in argument order.
///
/// Literal paths are always kept. Glob matches are filtered by `exclude`,
/// which falls back to [`DEFAULT_EXCLUDE`] when empty. Duplicates are dropped.
pub fn resolve(patterns: &[String], exclude: &[String]) -> Result<Vec<Input>> {
    let exclude = exclude_patterns(exclude)?;
    let defaults = [DEFAULT_PATTERN.to_string()];
    let patterns = if patterns.is_empty() {
        &defaults[..]
    } else {
        patterns
    };

    let mut inputs = Vec::new();
    for pattern in patterns {
        if pattern == STDIN_ARG {
            push_unique(&mut inputs, Input::Stdin);
        } else if has_glob_chars(pattern) {
            let mut matched = 0;
            let paths = glob::glob(pattern)
                .wrap_err_with(|| format!("invalid glob pattern '{}'", pattern))?;
            for path in paths {
                let path = path?;
                if !path.is_file() {
                    continue;
                }
                if is_excluded(&path, &exclude) {
                    tracing::debug!(path = %path.display(), "excluded");
                    continue;
                }
                matched += 1;
                push_unique(&mut inputs, Input::File(path));
            }
            if matched == 0 {
                tracing::warn!(pattern = pattern.as_str(), "pattern matched no schema files");
            }
        } else {
            push_unique(&mut inputs, Input::File(PathBuf::from(pattern)));
        }
    }

    Ok(inputs)
}

fn exclude_patterns(exclude: &[String]) -> Result<Vec<Pattern>> {
    let defaults = [DEFAULT_EXCLUDE.to_string()];
    let exclude = if exclude.is_empty() {
        &defaults[..]
    } else {
        exclude
    };

    exclude
        .iter()
        .map(|p| Pattern::new(p).wrap_err_with(|| format!("invalid exclude pattern '{}'", p)))
        .collect()
}

fn is_excluded(path: &Path, exclude: &[Pattern]) -> bool {
    let path = path.strip_prefix(".").unwrap_or(path);
    exclude.iter().any(|pattern| pattern.matches_path(path))
}

fn has_glob_chars(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
}

fn push_unique(inputs: &mut Vec<Input>, input: Input) {
    if !inputs.contains(&input) {
        inputs.push(input);
    }
}
