//! References from fields and arguments to named types.

use std::fmt;

use serde::Serialize;

use crate::TypeKind;

/// A possibly wrapped reference to a named type.
///
/// Wrappers nest finitely: `[Int!]` is `List(NonNull(Named Int))`.
/// The kind of the referenced type is carried alongside its name, the way
/// introspection reports it, so consumers never need a graph lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeRef {
    Named { name: String, of_kind: TypeKind },
    List { of_type: Box<TypeRef> },
    NonNull { of_type: Box<TypeRef> },
}

impl TypeRef {
    /// Reference a named type of the given kind.
    pub fn named(name: impl Into<String>, kind: TypeKind) -> Self {
        TypeRef::Named {
            name: name.into(),
            of_kind: kind,
        }
    }

    /// Reference a scalar type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(name, TypeKind::Scalar)
    }

    /// Wrap a reference in a list.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List {
            of_type: Box::new(inner),
        }
    }

    /// Wrap a reference as non-null.
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull {
            of_type: Box::new(inner),
        }
    }

    /// Returns true if the outermost wrapper is `NonNull`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull { .. })
    }

    /// The innermost named type and its kind.
    pub fn named_type(&self) -> (&str, TypeKind) {
        match self {
            TypeRef::Named { name, of_kind } => (name, *of_kind),
            TypeRef::List { of_type } | TypeRef::NonNull { of_type } => of_type.named_type(),
        }
    }

    /// The scalar name of a reference that is a scalar, or a scalar wrapped
    /// in exactly one `NonNull`. Lists and non-scalars return `None`.
    pub fn plain_scalar(&self) -> Option<&str> {
        match self {
            TypeRef::Named {
                name,
                of_kind: TypeKind::Scalar,
            } => Some(name),
            TypeRef::NonNull { of_type } => match of_type.as_ref() {
                TypeRef::Named {
                    name,
                    of_kind: TypeKind::Scalar,
                } => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Formats the reference in GraphQL notation, e.g. `[Int!]!`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, .. } => write!(f, "{}", name),
            TypeRef::List { of_type } => write!(f, "[{}]", of_type),
            TypeRef::NonNull { of_type } => write!(f, "{}!", of_type),
        }
    }
}
