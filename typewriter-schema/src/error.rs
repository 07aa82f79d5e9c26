use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema and config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the source text and its display name together so that every error
/// raised while loading one input points into the same named source.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a JSON parse error, pointing at the line and column serde_json reports.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = (source.line() > 0)
            .then(|| offset_of(&self.src, source.line(), source.column()))
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an error for an SDL document that failed to parse or validate.
    pub fn schema_error(&self, report: impl Into<String>) -> Box<Error> {
        Box::new(Error::Schema {
            name: self.filename.clone(),
            report: report.into(),
        })
    }

    /// Create an error for a structurally broken introspection result.
    pub fn introspection_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Introspection {
            src: self.named_source(),
            message: message.into(),
        })
    }

    /// Create a config validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a config validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }
}

/// Byte offset of a 1-based line and column, clamped to the source length.
fn offset_of(src: &str, line: usize, column: usize) -> usize {
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(src.len())
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(typewriter::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse typewriter.toml")]
    #[diagnostic(code(typewriter::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse introspection result")]
    #[diagnostic(
        code(typewriter::json_error),
        help("the file must contain the JSON response of a standard introspection query")
    )]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{name}' is not a valid GraphQL schema")]
    #[diagnostic(code(typewriter::invalid_schema))]
    Schema {
        name: String,
        #[help]
        report: String,
    },

    #[error("malformed introspection result: {message}")]
    #[diagnostic(code(typewriter::introspection))]
    Introspection {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },

    #[error("{message}")]
    #[diagnostic(code(typewriter::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for a path that could not be read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
