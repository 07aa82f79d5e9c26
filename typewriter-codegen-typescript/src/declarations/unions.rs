//! Union declarations.

use typewriter_ir::{TypeGraph, UnionType};

use crate::{
    ast::TypeAlias,
    ts_type::{TsType, TypeResolver},
};

pub fn render(graph: &TypeGraph, _resolver: &TypeResolver<'_>) -> Vec<String> {
    graph.unions().map(render_union).collect()
}

fn render_union(ty: &UnionType) -> String {
    // Union members are always object types
    let variants = ty
        .possible_types
        .iter()
        .map(|name| TsType::Generic(name.clone()).to_string());

    TypeAlias::union(&ty.name, variants)
        .generic()
        .doc(ty.description.as_deref())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let ty = UnionType {
            name: "SearchResult".to_string(),
            description: None,
            possible_types: vec!["Human".to_string(), "Droid".to_string()],
        };
        assert_eq!(
            render_union(&ty),
            "export type SearchResult<Ctx> = Human<Ctx> | Droid<Ctx>"
        );
    }
}
