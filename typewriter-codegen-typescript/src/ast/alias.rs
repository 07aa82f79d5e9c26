//! TypeScript type alias builder.

use typewriter_codegen::source;

use super::doc_comment;
use crate::ts_type::CONTEXT_PARAM;

/// Builder for exported type aliases (`export type Foo = ...`).
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    generic: bool,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generic: false,
            ty: ty.into(),
        }
    }

    /// Create a union alias from variants.
    pub fn union(name: impl Into<String>, variants: impl IntoIterator<Item = String>) -> Self {
        let variants: Vec<_> = variants.into_iter().collect();
        Self::new(name, variants.join(" | "))
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Parameterize the alias by the context type (`Name<Ctx>`).
    pub fn generic(mut self) -> Self {
        self.generic = true;
        self
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        let params = if self.generic {
            format!("<{}>", CONTEXT_PARAM)
        } else {
            String::new()
        };
        source!(
            "
${}
export type ${}${} = ${}
",
            doc_comment(self.doc.as_deref()),
            &self.name,
            params,
            &self.ty
        )
    }
}
