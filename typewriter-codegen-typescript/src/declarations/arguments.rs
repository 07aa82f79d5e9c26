//! Argument objects for root operation fields.
//!
//! Only fields of the query, mutation and subscription types get an
//! argument object. Arguments are typed with the scalar table alone;
//! anything else is `any`.

use typewriter_ir::{Field, InputValue, TypeGraph};

use crate::{
    ast::{Interface, Member},
    ts_type::TypeResolver,
};

/// Name of the argument object for a field: the field name verbatim plus `Args`.
pub fn type_name(field: &str) -> String {
    format!("{}Args", field)
}

pub fn render(graph: &TypeGraph, resolver: &TypeResolver<'_>) -> Vec<String> {
    graph
        .root_objects()
        .flat_map(|root| root.fields.iter())
        .filter(|field| field.has_args())
        .map(|field| render_arguments(field, resolver))
        .collect()
}

fn render_arguments(field: &Field, resolver: &TypeResolver<'_>) -> String {
    Interface::new(type_name(&field.name))
        .members(field.args.iter().map(|arg| argument_member(arg, resolver)))
        .build()
}

fn argument_member(arg: &InputValue, resolver: &TypeResolver<'_>) -> Member {
    Member::new(&arg.name, resolver.resolve_argument(&arg.ty))
        .doc(arg.description.as_deref())
        .optional(!arg.ty.is_non_null())
}

#[cfg(test)]
mod tests {
    use typewriter_ir::{ObjectType, RootTypes, TypeDescriptor, TypeKind, TypeRef};

    use super::*;
    use crate::TypeScriptTypeMapper;

    fn object(name: &str, fields: Vec<Field>) -> TypeDescriptor {
        TypeDescriptor::Object(ObjectType {
            name: name.to_string(),
            description: None,
            fields,
            interfaces: Vec::new(),
        })
    }

    fn render_graph(graph: &TypeGraph) -> Vec<String> {
        let mapper = TypeScriptTypeMapper::default();
        render(graph, &TypeResolver::new(&mapper))
    }

    #[test]
    fn test_root_field_arguments() {
        let hero = Field::new("hero", TypeRef::named("Human", TypeKind::Object))
            .arg(InputValue::new("episode", TypeRef::named("Episode", TypeKind::Enum)))
            .arg(InputValue::new("id", TypeRef::non_null(TypeRef::scalar("ID"))))
            .arg(InputValue::new("first", TypeRef::scalar("Int")).description("Page size"));
        let graph = TypeGraph::new(
            RootTypes::new("Query"),
            vec![object("Query", vec![hero, Field::new("version", TypeRef::scalar("String"))])],
        );

        assert_eq!(
            render_graph(&graph),
            vec![
                "export interface heroArgs {\n    episode?: any\n    id: string\n    /**\n     * Page size\n     */\n    first?: number\n}"
            ]
        );
    }

    #[test]
    fn test_non_root_fields_are_skipped() {
        let friends = Field::new("friends", TypeRef::named("Human", TypeKind::Object))
            .arg(InputValue::new("first", TypeRef::scalar("Int")));
        let graph = TypeGraph::new(
            RootTypes::new("Query"),
            vec![object("Query", Vec::new()), object("Human", vec![friends])],
        );

        assert!(render_graph(&graph).is_empty());
    }

    #[test]
    fn test_mutation_and_subscription_roots() {
        let field = |name: &str| {
            Field::new(name, TypeRef::scalar("Boolean"))
                .arg(InputValue::new("id", TypeRef::scalar("ID")))
        };
        let graph = TypeGraph::new(
            RootTypes::new("Query")
                .with_mutation("Mutation")
                .with_subscription("Subscription"),
            vec![
                object("Query", Vec::new()),
                object("Mutation", vec![field("remove")]),
                object("Subscription", vec![field("removed")]),
            ],
        );

        assert_eq!(
            render_graph(&graph),
            vec![
                "export interface removeArgs {\n    id?: string\n}",
                "export interface removedArgs {\n    id?: string\n}",
            ]
        );
    }
}
