//! TypeScript type expressions and the resolver that produces them.

use std::fmt;

use typewriter_codegen::language::TypeMapper;
use typewriter_ir::{TypeKind, TypeRef};

/// Name of the generic parameter carrying the resolver execution context.
pub const CONTEXT_PARAM: &str = "Ctx";

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// A plain type: a mapped scalar, an enum or an input object.
    Named(String),
    /// An object, interface or union, parameterized by the context type.
    Generic(String),
    /// `T[]`
    Array(Box<TsType>),
    /// `T | undefined`
    Optional(Box<TsType>),
    /// `any`: a best-effort placeholder where the real type is not rendered
    /// (unmapped scalars, non-scalar arguments).
    Unchecked,
}

impl TsType {
    pub fn array(element: TsType) -> Self {
        TsType::Array(Box::new(element))
    }

    pub fn optional(inner: TsType) -> Self {
        TsType::Optional(Box::new(inner))
    }

    /// `T | undefined` must be parenthesized before `[]` is appended. An
    /// optional array is already rendered in parentheses.
    fn needs_parens_as_element(&self) -> bool {
        match self {
            TsType::Optional(inner) => !matches!(inner.as_ref(), TsType::Array(_)),
            _ => false,
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::Named(name) => write!(f, "{}", name),
            TsType::Generic(name) => write!(f, "{}<{}>", name, CONTEXT_PARAM),
            TsType::Array(element) if element.needs_parens_as_element() => write!(f, "({})[]", element),
            TsType::Array(element) => write!(f, "{}[]", element),
            TsType::Optional(inner) => match inner.as_ref() {
                TsType::Array(_) => write!(f, "({} | undefined)", inner),
                _ => write!(f, "{} | undefined", inner),
            },
            TsType::Unchecked => write!(f, "any"),
        }
    }
}

/// Turns GraphQL type references into TypeScript type expressions.
pub struct TypeResolver<'a> {
    mapper: &'a dyn TypeMapper,
}

impl<'a> TypeResolver<'a> {
    pub fn new(mapper: &'a dyn TypeMapper) -> Self {
        Self { mapper }
    }

    /// Resolve a field, argument or input-field type.
    ///
    /// `nullable` says whether the enclosing position admits absence; it is
    /// `true` at the top of every member, since GraphQL types are nullable
    /// unless wrapped in `NonNull`.
    pub fn resolve(&self, ty: &TypeRef, nullable: bool) -> TsType {
        match ty {
            TypeRef::NonNull { of_type } => self.resolve(of_type, false),
            TypeRef::List { of_type } => {
                let list = TsType::array(self.resolve(of_type, true));
                if nullable { TsType::optional(list) } else { list }
            }
            TypeRef::Named { name, of_kind } => {
                let base = match of_kind {
                    TypeKind::Scalar => self.scalar(name),
                    kind if kind.is_composite() => TsType::Generic(name.clone()),
                    _ => TsType::Named(name.clone()),
                };
                if nullable { TsType::optional(base) } else { base }
            }
        }
    }

    /// Resolve an argument-object member.
    ///
    /// Only a scalar, optionally non-null, is typed; anything else is
    /// [`TsType::Unchecked`]. Absence is expressed by the `?` suffix alone.
    pub fn resolve_argument(&self, ty: &TypeRef) -> TsType {
        ty.plain_scalar()
            .map_or(TsType::Unchecked, |name| self.scalar(name))
    }

    fn scalar(&self, name: &str) -> TsType {
        match self.mapper.map_scalar(name) {
            Some(target) => TsType::Named(target.to_string()),
            None => {
                tracing::debug!(
                    scalar = name,
                    language = self.mapper.language(),
                    "no target type, rendering as `any`"
                );
                TsType::Unchecked
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use typewriter_core::ScalarMap;

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn resolve(ty: &TypeRef, nullable: bool) -> String {
        let mapper = TypeScriptTypeMapper::default();
        TypeResolver::new(&mapper).resolve(ty, nullable).to_string()
    }

    fn resolve_argument(ty: &TypeRef) -> String {
        let mapper = TypeScriptTypeMapper::default();
        TypeResolver::new(&mapper).resolve_argument(ty).to_string()
    }

    #[test]
    fn test_non_null_scalar() {
        let ty = TypeRef::non_null(TypeRef::scalar("String"));
        assert_eq!(resolve(&ty, true), "string");
    }

    #[test]
    fn test_nullable_scalar() {
        assert_eq!(resolve(&TypeRef::scalar("String"), true), "string | undefined");
        assert_eq!(resolve(&TypeRef::scalar("ID"), true), "string | undefined");
    }

    #[test]
    fn test_nullable_list_of_non_null() {
        let ty = TypeRef::list(TypeRef::non_null(TypeRef::scalar("Int")));
        assert_eq!(resolve(&ty, true), "(number[] | undefined)");
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::scalar("Int"))));
        assert_eq!(resolve(&ty, true), "number[]");
    }

    #[test]
    fn test_list_elements_default_to_nullable() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::named("Character", TypeKind::Interface)));
        assert_eq!(resolve(&ty, true), "(Character<Ctx> | undefined)[]");
    }

    #[test]
    fn test_nested_lists() {
        let ty = TypeRef::list(TypeRef::list(TypeRef::scalar("Float")));
        assert_eq!(
            resolve(&ty, true),
            "(((number | undefined)[] | undefined)[] | undefined)"
        );
    }

    #[test]
    fn test_named_kinds() {
        assert_eq!(
            resolve(&TypeRef::named("Episode", TypeKind::Enum), false),
            "Episode"
        );
        assert_eq!(
            resolve(&TypeRef::named("ReviewInput", TypeKind::InputObject), false),
            "ReviewInput"
        );
        assert_eq!(
            resolve(&TypeRef::named("Human", TypeKind::Object), false),
            "Human<Ctx>"
        );
        assert_eq!(
            resolve(&TypeRef::named("SearchResult", TypeKind::Union), true),
            "SearchResult<Ctx> | undefined"
        );
    }

    #[test]
    fn test_unmapped_scalar_is_unchecked() {
        assert_eq!(resolve(&TypeRef::scalar("JSON"), false), "any");
        assert_eq!(resolve(&TypeRef::scalar("JSON"), true), "any | undefined");
    }

    #[test]
    fn test_configured_scalar() {
        let mapper = TypeScriptTypeMapper::new(ScalarMap::new().with("DateTime", "string"));
        let resolver = TypeResolver::new(&mapper);
        assert_eq!(
            resolver.resolve(&TypeRef::scalar("DateTime"), false),
            TsType::Named("string".to_string())
        );
    }

    #[test]
    fn test_resolve_is_pure() {
        let ty = TypeRef::list(TypeRef::named("Human", TypeKind::Object));
        assert_eq!(resolve(&ty, true), resolve(&ty, true));
    }

    #[test]
    fn test_argument_types() {
        assert_eq!(resolve_argument(&TypeRef::scalar("Int")), "number");
        assert_eq!(
            resolve_argument(&TypeRef::non_null(TypeRef::scalar("String"))),
            "string"
        );
        assert_eq!(
            resolve_argument(&TypeRef::named("Episode", TypeKind::Enum)),
            "any"
        );
        assert_eq!(
            resolve_argument(&TypeRef::list(TypeRef::scalar("Int"))),
            "any"
        );
        assert_eq!(resolve_argument(&TypeRef::scalar("JSON")), "any");
    }
}
