//! Object type declarations.

use typewriter_ir::{ObjectType, TypeGraph};

use super::field_member;
use crate::{
    ast::{Interface, Member},
    ts_type::TypeResolver,
};

/// Field name of the synthetic discriminant member.
pub const TYPENAME_FIELD: &str = "__typename";

pub fn render(graph: &TypeGraph, resolver: &TypeResolver<'_>) -> Vec<String> {
    graph
        .objects()
        .map(|object| render_object(graph, object, resolver))
        .collect()
}

fn render_object(graph: &TypeGraph, object: &ObjectType, resolver: &TypeResolver<'_>) -> String {
    let mut interface = Interface::new(&object.name)
        .generic()
        .doc(object.description.as_deref());

    for parent in &object.interfaces {
        interface = interface.extends(parent);
    }

    // Only members of a union or interface need to identify themselves
    if graph.is_discriminated(&object.name) {
        interface = interface.member(Member::new(
            TYPENAME_FIELD,
            format!("'{}'", object.name),
        ));
    }

    interface
        .members(
            object
                .fields
                .iter()
                .map(|field| field_member(&object.name, field, resolver)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use typewriter_ir::{Field, InterfaceType, RootTypes, TypeDescriptor, TypeKind, TypeRef};

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn object(name: &str, interfaces: &[&str]) -> TypeDescriptor {
        TypeDescriptor::Object(ObjectType {
            name: name.to_string(),
            description: None,
            fields: vec![Field::new("id", TypeRef::non_null(TypeRef::scalar("ID")))],
            interfaces: interfaces.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn render_graph(graph: &TypeGraph) -> Vec<String> {
        let mapper = TypeScriptTypeMapper::default();
        render(graph, &TypeResolver::new(&mapper))
    }

    #[test]
    fn test_plain_object_has_no_discriminant() {
        let graph = TypeGraph::new(RootTypes::new("Query"), vec![object("Query", &[])]);
        assert_eq!(
            render_graph(&graph),
            vec!["export interface Query<Ctx> {\n    id: GraphqlField<Query<Ctx>, {}, string, Ctx>\n}"]
        );
    }

    #[test]
    fn test_implementing_object_extends_and_discriminates() {
        let graph = TypeGraph::new(
            RootTypes::new("Query"),
            vec![
                object("Human", &["Character"]),
                TypeDescriptor::Interface(InterfaceType {
                    name: "Character".to_string(),
                    description: None,
                    fields: vec![Field::new("id", TypeRef::non_null(TypeRef::scalar("ID")))],
                    possible_types: vec!["Human".to_string()],
                }),
            ],
        );

        let rendered = render_graph(&graph);
        assert_eq!(rendered.len(), 1);
        assert_eq!(
            rendered[0],
            "export interface Human<Ctx> extends Character<Ctx> {\n    __typename: 'Human'\n    id: GraphqlField<Human<Ctx>, {}, string, Ctx>\n}"
        );
    }

    #[test]
    fn test_object_field_types() {
        let graph = TypeGraph::new(
            RootTypes::new("Query"),
            vec![TypeDescriptor::Object(ObjectType {
                name: "Query".to_string(),
                description: Some("Root".to_string()),
                fields: vec![Field::new(
                    "friends",
                    TypeRef::list(TypeRef::named("Human", TypeKind::Object)),
                )],
                interfaces: Vec::new(),
            })],
        );
        assert_eq!(
            render_graph(&graph)[0],
            "/**\n * Root\n */\nexport interface Query<Ctx> {\n    friends?: GraphqlField<Query<Ctx>, {}, ((Human<Ctx> | undefined)[] | undefined), Ctx>\n}"
        );
    }
}
