//! TypeScript interface builder.

use typewriter_codegen::source;

use super::doc_comment;
use crate::ts_type::CONTEXT_PARAM;

/// A member of a TypeScript interface.
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: impl std::fmt::Display) -> Self {
        Self {
            name: name.into(),
            ty: ty.to_string(),
            doc: None,
            optional: false,
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Mark the member optional (`name?: T`).
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Render the member with its doc comment, if any.
    pub fn build(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        source!(
            "
${}
${}${}: ${}
",
            doc_comment(self.doc.as_deref()),
            &self.name,
            optional,
            &self.ty
        )
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    generic: bool,
    extends: Vec<String>,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generic: false,
            extends: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<&str>) -> Self {
        self.doc = doc.map(str::to_string);
        self
    }

    /// Parameterize the interface by the context type (`Name<Ctx>`).
    pub fn generic(mut self) -> Self {
        self.generic = true;
        self
    }

    /// Extend a context-parameterized interface.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    fn head(&self) -> String {
        let mut head = format!("export interface {}", self.name);
        if self.generic {
            head.push_str(&format!("<{}>", CONTEXT_PARAM));
        }
        if !self.extends.is_empty() {
            let parents: Vec<_> = self
                .extends
                .iter()
                .map(|parent| format!("{}<{}>", parent, CONTEXT_PARAM))
                .collect();
            head.push_str(&format!(" extends {}", parents.join(", ")));
        }
        head
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let doc = doc_comment(self.doc.as_deref());

        if self.members.is_empty() {
            return source!(
                "
${}
${} {}
",
                doc,
                self.head()
            );
        }

        let members: Vec<_> = self.members.iter().map(Member::build).collect();
        source!(
            "
${}
${} {
    ${}
}
",
            doc,
            self.head(),
            members.join("\n")
        )
    }
}
