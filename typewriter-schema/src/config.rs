//! The optional `typewriter.toml` configuration file.

use std::path::Path;

use miette::SourceSpan;
use serde::Deserialize;
use typewriter_core::{BuiltinScalar, ScalarMap};

use crate::{Error, Result, SourceContext};

/// Settings read from `typewriter.toml`.
///
/// ```toml
/// [scalars]
/// DateTime = "string"
/// JSON = "unknown"
///
/// [generate]
/// exclude = ["vendor/**"]
/// skip_unchanged = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target types for custom scalars
    #[serde(default)]
    pub scalars: ScalarMap,

    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults for the `generate` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Glob patterns excluded from schema discovery
    pub exclude: Vec<String>,

    /// Leave generated files untouched when their content would not change
    pub skip_unchanged: bool,
}

impl Config {
    pub const FILE_NAME: &'static str = "typewriter.toml";

    /// Read and validate a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Look for `typewriter.toml` in `dir`. A missing file is not an error.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(Self::FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        tracing::debug!(path = %path.display(), "using config file");
        Self::open(path).map(Some)
    }

    /// Parse a config from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.config_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for (scalar, target) in self.scalars.iter() {
            if BuiltinScalar::from_name(scalar).is_some() {
                let message = format!("built-in scalar '{scalar}' cannot be remapped");
                return Err(match find_key_span(ctx.src(), scalar) {
                    Some(span) => ctx.validation_error_at(message, span),
                    None => ctx.validation_error(message),
                });
            }
            if target.trim().is_empty() {
                return Err(
                    ctx.validation_error(format!("scalar '{scalar}' has an empty target type"))
                );
            }
        }
        Ok(())
    }
}

/// Find the span of a `key =` assignment in a TOML source.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let bare = trimmed.strip_prefix(key).map(|_| key.len());
        let quoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_prefix(key))
            .and_then(|rest| rest.strip_prefix('"'))
            .map(|_| key.len() + 2);

        if let Some(len) = bare.or(quoted) {
            if trimmed[len..].trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, len)));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_str_with_filename(
            r#"
            [scalars]
            DateTime = "string"

            [generate]
            exclude = ["vendor/**"]
            skip_unchanged = true
            "#,
            "typewriter.toml",
        )
        .unwrap();

        assert_eq!(config.scalars.get("DateTime"), Some("string"));
        assert_eq!(config.generate.exclude, vec!["vendor/**"]);
        assert!(config.generate.skip_unchanged);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str_with_filename("", "typewriter.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = Config::from_str_with_filename("[output]\ndir = \"x\"", "typewriter.toml")
            .unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_builtin_scalar_cannot_be_remapped() {
        let src = "[scalars]\nInt = \"bigint\"\n";
        let err = Config::from_str_with_filename(src, "typewriter.toml").unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "built-in scalar 'Int' cannot be remapped");
                assert_eq!(span, Some(SourceSpan::from((10, 3))));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_target_is_rejected() {
        let err = Config::from_str_with_filename("[scalars]\nJSON = \" \"", "typewriter.toml")
            .unwrap_err();
        assert!(err.to_string().contains("empty target type"));
    }

    #[test]
    fn test_find_key_span_quoted() {
        let src = "[scalars]\n  \"Date\" = \"string\"";
        assert_eq!(find_key_span(src, "Date"), Some(SourceSpan::from((12, 6))));
        assert_eq!(find_key_span(src, "Time"), None);
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::discover(temp.path()).unwrap(), None);

        std::fs::write(
            temp.path().join(Config::FILE_NAME),
            "[scalars]\nDate = \"string\"\n",
        )
        .unwrap();
        let config = Config::discover(temp.path()).unwrap().unwrap();
        assert_eq!(config.scalars.get("Date"), Some("string"));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Config::open("/nonexistent/typewriter.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
