//! Named type descriptors and their members.

use serde::Serialize;

use crate::TypeRef;

/// The kind of a named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// Get the introspection name of this kind (e.g. `INPUT_OBJECT`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
        }
    }

    /// Parse an introspection kind name. Wrapper kinds (`LIST`, `NON_NULL`)
    /// are not named kinds and return `None`.
    pub fn from_introspection(kind: &str) -> Option<Self> {
        match kind {
            "SCALAR" => Some(TypeKind::Scalar),
            "OBJECT" => Some(TypeKind::Object),
            "INTERFACE" => Some(TypeKind::Interface),
            "UNION" => Some(TypeKind::Union),
            "ENUM" => Some(TypeKind::Enum),
            "INPUT_OBJECT" => Some(TypeKind::InputObject),
            _ => None,
        }
    }

    /// Returns true for kinds whose values are resolved lazily and need the
    /// execution context threaded through.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            TypeKind::Object | TypeKind::Interface | TypeKind::Union
        )
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<InputValue>,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            args: Vec::new(),
            ty,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn arg(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

/// A field argument or an input object field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputValue {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    /// Default value in GraphQL notation. Kept for completeness; rendering
    /// does not use it.
    pub default_value: Option<String>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub name: String,
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Names of the implemented interfaces, in declaration order.
    pub interfaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    /// Names of the object types implementing this interface.
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub possible_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<InputValue>,
}

/// A named type of the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDescriptor {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Scalar(t) => &t.name,
            TypeDescriptor::Object(t) => &t.name,
            TypeDescriptor::Interface(t) => &t.name,
            TypeDescriptor::Union(t) => &t.name,
            TypeDescriptor::Enum(t) => &t.name,
            TypeDescriptor::InputObject(t) => &t.name,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Scalar(t) => t.description.as_deref(),
            TypeDescriptor::Object(t) => t.description.as_deref(),
            TypeDescriptor::Interface(t) => t.description.as_deref(),
            TypeDescriptor::Union(t) => t.description.as_deref(),
            TypeDescriptor::Enum(t) => t.description.as_deref(),
            TypeDescriptor::InputObject(t) => t.description.as_deref(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDescriptor::Scalar(_) => TypeKind::Scalar,
            TypeDescriptor::Object(_) => TypeKind::Object,
            TypeDescriptor::Interface(_) => TypeKind::Interface,
            TypeDescriptor::Union(_) => TypeKind::Union,
            TypeDescriptor::Enum(_) => TypeKind::Enum,
            TypeDescriptor::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Fields of object and interface types.
    pub fn fields(&self) -> &[Field] {
        match self {
            TypeDescriptor::Object(t) => &t.fields,
            TypeDescriptor::Interface(t) => &t.fields,
            _ => &[],
        }
    }

    /// Concrete object types of a union or interface.
    pub fn possible_types(&self) -> Option<&[String]> {
        match self {
            TypeDescriptor::Interface(t) => Some(&t.possible_types),
            TypeDescriptor::Union(t) => Some(&t.possible_types),
            _ => None,
        }
    }

    /// Returns true for unions and interfaces.
    pub fn is_polymorphic(&self) -> bool {
        self.possible_types().is_some()
    }
}
