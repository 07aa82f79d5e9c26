//! Input object declarations: plain data, no resolvers.

use typewriter_ir::{InputObjectType, TypeGraph};

use crate::{
    ast::{Interface, Member},
    ts_type::TypeResolver,
};

pub fn render(graph: &TypeGraph, resolver: &TypeResolver<'_>) -> Vec<String> {
    graph
        .input_objects()
        .map(|input| render_input_object(input, resolver))
        .collect()
}

fn render_input_object(input: &InputObjectType, resolver: &TypeResolver<'_>) -> String {
    Interface::new(&input.name)
        .doc(input.description.as_deref())
        .members(input.fields.iter().map(|field| {
            Member::new(&field.name, resolver.resolve(&field.ty, true))
                .doc(field.description.as_deref())
                .optional(!field.ty.is_non_null())
        }))
        .build()
}

#[cfg(test)]
mod tests {
    use typewriter_ir::{InputValue, RootTypes, TypeDescriptor, TypeKind, TypeRef};

    use super::*;
    use crate::TypeScriptTypeMapper;

    #[test]
    fn test_input_object() {
        let graph = TypeGraph::new(
            RootTypes::new("Query"),
            vec![TypeDescriptor::InputObject(InputObjectType {
                name: "ReviewInput".to_string(),
                description: Some("A review".to_string()),
                fields: vec![
                    InputValue::new("stars", TypeRef::non_null(TypeRef::scalar("Int"))),
                    InputValue::new("episode", TypeRef::named("Episode", TypeKind::Enum)),
                    InputValue::new(
                        "tags",
                        TypeRef::list(TypeRef::non_null(TypeRef::scalar("String"))),
                    ),
                ],
            })],
        );
        let mapper = TypeScriptTypeMapper::default();

        assert_eq!(
            render(&graph, &TypeResolver::new(&mapper)),
            vec![
                "/**\n * A review\n */\nexport interface ReviewInput {\n    stars: number\n    episode?: Episode | undefined\n    tags?: (string[] | undefined)\n}"
            ]
        );
    }
}
