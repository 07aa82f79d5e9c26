//! The type graph of a schema.

use serde::Serialize;

use crate::{
    EnumType, Field, InputObjectType, InterfaceType, ObjectType, TypeDescriptor, UnionType,
};

/// Types that belong to introspection itself and are never rendered.
pub const INTROSPECTION_TYPES: [&str; 8] = [
    "__Schema",
    "__Type",
    "__TypeKind",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__Directive",
    "__DirectiveLocation",
];

/// Returns true if `name` is one of the introspection meta-types.
pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPES.contains(&name)
}

/// Names of the root operation types.
///
/// Mutation and subscription roots are optional; an absent root is `None`
/// and never matches a type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootTypes {
    pub query: String,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
}

impl RootTypes {
    /// Roots with only a query type.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mutation: None,
            subscription: None,
        }
    }

    /// The conventional root names, used when a source does not say which
    /// types are the roots.
    pub fn conventional() -> Self {
        Self::new("Query")
            .with_mutation("Mutation")
            .with_subscription("Subscription")
    }

    pub fn with_mutation(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    pub fn with_subscription(mut self, name: impl Into<String>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    /// Names of the roots that are present, in query/mutation/subscription order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.query.as_str())
            .chain(self.mutation.as_deref())
            .chain(self.subscription.as_deref())
    }

    /// Returns true if `name` is one of the present roots.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|root| root == name)
    }
}

impl Default for RootTypes {
    fn default() -> Self {
        Self::conventional()
    }
}

/// All named types reachable from a schema's root operation types.
///
/// Built once by a loader and only borrowed afterwards. Type order is the
/// order the source reported, and every rendered section follows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeGraph {
    roots: RootTypes,
    types: Vec<TypeDescriptor>,
}

impl TypeGraph {
    pub fn new(roots: RootTypes, types: Vec<TypeDescriptor>) -> Self {
        Self { roots, types }
    }

    pub fn roots(&self) -> &RootTypes {
        &self.roots
    }

    /// Every type in the graph, introspection types included.
    pub fn all_types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Every type except the introspection meta-types.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types
            .iter()
            .filter(|ty| !is_introspection_type(ty.name()))
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.types().filter_map(|ty| match ty {
            TypeDescriptor::Object(t) => Some(t),
            _ => None,
        })
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.types().filter_map(|ty| match ty {
            TypeDescriptor::Interface(t) => Some(t),
            _ => None,
        })
    }

    pub fn unions(&self) -> impl Iterator<Item = &UnionType> {
        self.types().filter_map(|ty| match ty {
            TypeDescriptor::Union(t) => Some(t),
            _ => None,
        })
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumType> {
        self.types().filter_map(|ty| match ty {
            TypeDescriptor::Enum(t) => Some(t),
            _ => None,
        })
    }

    pub fn input_objects(&self) -> impl Iterator<Item = &InputObjectType> {
        self.types().filter_map(|ty| match ty {
            TypeDescriptor::InputObject(t) => Some(t),
            _ => None,
        })
    }

    /// Unions and interfaces, in graph order.
    pub fn polymorphic_types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types().filter(|ty| ty.is_polymorphic())
    }

    /// Returns true if `name` is a possible type of some union or interface,
    /// i.e. values of that type need a `__typename` discriminant.
    pub fn is_discriminated(&self, name: &str) -> bool {
        self.polymorphic_types().any(|ty| {
            ty.possible_types()
                .is_some_and(|possible| possible.iter().any(|p| p == name))
        })
    }

    /// Root operation types present in the graph, in graph order.
    pub fn root_objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects()
            .filter(|object| self.roots.contains(&object.name))
    }

    /// Every field of every object and interface, paired with its parent type name.
    pub fn all_fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.types()
            .flat_map(|ty| ty.fields().iter().map(move |field| (ty.name(), field)))
    }
}
