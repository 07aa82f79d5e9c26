//! Loading a TypeGraph from GraphQL SDL.

use apollo_compiler::{
    Name, Schema,
    ast::{FieldDefinition, InputValueDefinition, OperationType, Type},
    collections::IndexMap,
    schema::{Component, ExtendedType},
};
use typewriter_ir::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, ObjectType, RootTypes,
    ScalarType, TypeDescriptor, TypeGraph, TypeKind, TypeRef, UnionType,
};

use crate::{Result, SourceContext};

/// Parse and validate SDL, then convert it into a TypeGraph.
pub(crate) fn load(ctx: &SourceContext) -> Result<TypeGraph> {
    let schema = Schema::parse_and_validate(ctx.src(), ctx.filename())
        .map_err(|with_errors| ctx.schema_error(with_errors.errors.to_string()))?;

    let root = |operation: OperationType| {
        schema
            .root_operation(operation)
            .map(|name| name.to_string())
    };
    let roots = RootTypes {
        query: root(OperationType::Query).unwrap_or_else(|| "Query".to_string()),
        mutation: root(OperationType::Mutation),
        subscription: root(OperationType::Subscription),
    };

    let types = schema
        .types
        .values()
        .filter(|ty| ty.is_scalar() || !ty.is_built_in())
        .map(|ty| descriptor(&schema, ty))
        .collect();

    Ok(TypeGraph::new(roots, types))
}

fn descriptor(schema: &Schema, ty: &ExtendedType) -> TypeDescriptor {
    let description = ty.description().map(|d| d.to_string());

    match ty {
        ExtendedType::Scalar(scalar) => TypeDescriptor::Scalar(ScalarType {
            name: scalar.name.to_string(),
            description,
        }),
        ExtendedType::Object(object) => TypeDescriptor::Object(ObjectType {
            name: object.name.to_string(),
            description,
            fields: fields(schema, &object.fields),
            interfaces: object
                .implements_interfaces
                .iter()
                .map(|i| i.name.to_string())
                .collect(),
        }),
        ExtendedType::Interface(interface) => TypeDescriptor::Interface(InterfaceType {
            name: interface.name.to_string(),
            description,
            fields: fields(schema, &interface.fields),
            possible_types: implementers(schema, &interface.name),
        }),
        ExtendedType::Union(union) => TypeDescriptor::Union(UnionType {
            name: union.name.to_string(),
            description,
            possible_types: union.members.iter().map(|m| m.name.to_string()).collect(),
        }),
        ExtendedType::Enum(enum_type) => TypeDescriptor::Enum(EnumType {
            name: enum_type.name.to_string(),
            description,
            values: enum_type
                .values
                .values()
                .map(|value| EnumValue {
                    name: value.value.to_string(),
                    description: value.description.as_deref().map(str::to_string),
                })
                .collect(),
        }),
        ExtendedType::InputObject(input) => TypeDescriptor::InputObject(InputObjectType {
            name: input.name.to_string(),
            description,
            fields: input
                .fields
                .values()
                .map(|field| input_value(schema, field))
                .collect(),
        }),
    }
}

/// Object types implementing `interface`, in schema order.
fn implementers(schema: &Schema, interface: &Name) -> Vec<String> {
    schema
        .types
        .values()
        .filter_map(|ty| match ty {
            ExtendedType::Object(object)
                if object
                    .implements_interfaces
                    .iter()
                    .any(|i| i.name == *interface) =>
            {
                Some(object.name.to_string())
            }
            _ => None,
        })
        .collect()
}

fn fields(schema: &Schema, fields: &IndexMap<Name, Component<FieldDefinition>>) -> Vec<Field> {
    fields
        .values()
        .map(|field| Field {
            name: field.name.to_string(),
            description: field.description.as_deref().map(str::to_string),
            args: field
                .arguments
                .iter()
                .map(|arg| input_value(schema, arg))
                .collect(),
            ty: type_ref(schema, &field.ty),
        })
        .collect()
}

fn input_value(schema: &Schema, value: &InputValueDefinition) -> InputValue {
    InputValue {
        name: value.name.to_string(),
        description: value.description.as_deref().map(str::to_string),
        ty: type_ref(schema, &value.ty),
        default_value: value.default_value.as_ref().map(|v| v.to_string()),
    }
}

fn type_ref(schema: &Schema, ty: &Type) -> TypeRef {
    match ty {
        Type::Named(name) => named(schema, name),
        Type::NonNullNamed(name) => TypeRef::non_null(named(schema, name)),
        Type::List(inner) => TypeRef::list(type_ref(schema, inner)),
        Type::NonNullList(inner) => TypeRef::non_null(TypeRef::list(type_ref(schema, inner))),
    }
}

fn named(schema: &Schema, name: &Name) -> TypeRef {
    // Validation guarantees every reference resolves.
    let kind = match schema.types.get(name) {
        Some(ExtendedType::Object(_)) => TypeKind::Object,
        Some(ExtendedType::Interface(_)) => TypeKind::Interface,
        Some(ExtendedType::Union(_)) => TypeKind::Union,
        Some(ExtendedType::Enum(_)) => TypeKind::Enum,
        Some(ExtendedType::InputObject(_)) => TypeKind::InputObject,
        Some(ExtendedType::Scalar(_)) | None => TypeKind::Scalar,
    };
    TypeRef::named(name.as_str(), kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn load_str(src: &str) -> Result<TypeGraph> {
        load(&SourceContext::new(src, "schema.graphqls"))
    }

    const STARWARS: &str = r#"
        type Query {
            "The hero of a film"
            hero(episode: Episode): Character
            search(text: String!): [SearchResult!]!
        }

        type Mutation {
            rename(id: ID!, name: String = "R2"): Human
        }

        "A character in the Star Wars universe"
        interface Character {
            id: ID!
            name: String
        }

        type Human implements Character {
            id: ID!
            name: String
            height: Float
        }

        type Droid implements Character {
            id: ID!
            name: String
            primaryFunction: String
        }

        union SearchResult = Human | Droid

        enum Episode {
            "Released in 1977."
            NEWHOPE
            EMPIRE
        }

        input ReviewInput {
            stars: Int!
            commentary: String
        }
    "#;

    #[test]
    fn test_load_keeps_schema_order_and_skips_introspection() {
        let graph = load_str(STARWARS).unwrap();
        let names: Vec<_> = graph
            .types()
            .filter(|ty| ty.kind() != TypeKind::Scalar)
            .map(|ty| ty.name())
            .collect();

        assert_eq!(
            names,
            vec![
                "Query",
                "Mutation",
                "Character",
                "Human",
                "Droid",
                "SearchResult",
                "Episode",
                "ReviewInput"
            ]
        );
        assert!(graph.all_types().iter().all(|ty| !ty.name().starts_with("__")));
    }

    #[test]
    fn test_load_roots() {
        let graph = load_str(STARWARS).unwrap();
        assert_eq!(graph.roots(), &RootTypes::new("Query").with_mutation("Mutation"));
    }

    #[test]
    fn test_load_type_references() {
        let graph = load_str(STARWARS).unwrap();
        let query = graph.objects().next().unwrap();

        let hero = &query.fields[0];
        assert_eq!(hero.description.as_deref(), Some("The hero of a film"));
        assert_eq!(hero.ty, TypeRef::named("Character", TypeKind::Interface));
        assert_eq!(hero.args[0].ty, TypeRef::named("Episode", TypeKind::Enum));

        let search = &query.fields[1];
        assert_eq!(search.ty.to_string(), "[SearchResult!]!");
        assert_eq!(search.ty.named_type(), ("SearchResult", TypeKind::Union));
    }

    #[test]
    fn test_load_default_values() {
        let graph = load_str(STARWARS).unwrap();
        let mutation = graph.objects().nth(1).unwrap();
        let rename = &mutation.fields[0];
        assert_eq!(rename.args[1].default_value.as_deref(), Some("\"R2\""));
        assert_eq!(rename.args[0].default_value, None);
    }

    #[test]
    fn test_load_interface_possible_types() {
        let graph = load_str(STARWARS).unwrap();
        let character = graph.interfaces().next().unwrap();
        assert_eq!(character.possible_types, vec!["Human", "Droid"]);
        assert_eq!(
            character.description.as_deref(),
            Some("A character in the Star Wars universe")
        );
        assert!(graph.is_discriminated("Human"));
    }

    #[test]
    fn test_load_enum_descriptions() {
        let graph = load_str(STARWARS).unwrap();
        let episode = graph.enums().next().unwrap();
        assert_eq!(episode.values[0].description.as_deref(), Some("Released in 1977."));
        assert_eq!(episode.values[1].description, None);
    }

    #[test]
    fn test_invalid_schema_is_reported() {
        let err = load_str("type Query { hero: Missing }").unwrap_err();
        match *err {
            Error::Schema { report, .. } => assert!(report.contains("Missing")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
