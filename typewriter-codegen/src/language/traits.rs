//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;
use typewriter_core::{BuiltinScalar, File, Overwrite, WriteResult};

/// Trait for language-specific code generators.
///
/// A generator renders one TypeGraph into one declaration file.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Suffix appended to the schema file name (e.g., "types.ts")
    fn file_extension(&self) -> &'static str;

    /// Render the complete declaration text, without a trailing newline.
    fn render(&self) -> String;

    /// Where output for `source` goes by default: the schema path with the
    /// file extension appended, next to the schema.
    fn target_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_os_string();
        name.push(".");
        name.push(self.file_extension());
        PathBuf::from(name)
    }

    /// The file that would be written to `target`, without touching disk.
    fn preview(&self, target: &Path) -> File {
        let mut content = self.render();
        content.push('\n');
        File::new(target, content)
    }

    /// Render and write the declarations to `target`.
    fn generate(&self, target: &Path, overwrite: Overwrite) -> Result<WriteResult> {
        self.preview(target).overwrite(overwrite).write()
    }
}

/// Trait for mapping GraphQL scalars to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a built-in scalar to a language-specific type string
    fn map_builtin_scalar(&self, scalar: BuiltinScalar) -> &'static str;

    /// Map a custom scalar, if the user configured a target type for it
    fn map_custom_scalar(&self, name: &str) -> Option<&str>;

    /// Map any scalar by name. Built-in scalars always win over configured ones.
    fn map_scalar(&self, name: &str) -> Option<&str> {
        match BuiltinScalar::from_name(name) {
            Some(scalar) => Some(self.map_builtin_scalar(scalar)),
            None => self.map_custom_scalar(name),
        }
    }
}
