use std::path::{Path, PathBuf};

use typewriter_ir::TypeGraph;

use crate::{Error, Result, SourceContext, introspection, sdl};

/// How the text of a schema file is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaFormat {
    /// GraphQL schema definition language
    #[default]
    Sdl,
    /// JSON result of an introspection query
    Introspection,
}

impl SchemaFormat {
    /// Pick the format from a file extension. Anything but `.json` is SDL.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SchemaFormat::Introspection,
            _ => SchemaFormat::Sdl,
        }
    }
}

/// A schema source read into memory.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: Option<PathBuf>,
    format: SchemaFormat,
    ctx: SourceContext,
}

impl SchemaFile {
    /// Read a schema file, choosing the format from its extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            format: SchemaFormat::from_path(path),
            ctx: SourceContext::new(content, path.display().to_string()),
        })
    }

    /// Use in-memory text (e.g. stdin) as an SDL schema. `name` is only used
    /// in error reports.
    pub fn from_source(src: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: None,
            format: SchemaFormat::Sdl,
            ctx: SourceContext::new(src, name),
        }
    }

    /// Path the schema was read from, `None` for in-memory sources.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Name used in reports.
    pub fn name(&self) -> &str {
        self.ctx.filename()
    }

    pub fn content(&self) -> &str {
        self.ctx.src()
    }

    /// Parse the source into a TypeGraph.
    pub fn load(&self) -> Result<TypeGraph> {
        tracing::debug!(name = self.name(), format = ?self.format, "loading schema");
        match self.format {
            SchemaFormat::Sdl => sdl::load(&self.ctx),
            SchemaFormat::Introspection => introspection::load(&self.ctx),
        }
    }
}
