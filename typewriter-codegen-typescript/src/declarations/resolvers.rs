//! The default resolver table.
//!
//! Every union and interface gets a `__resolveType` that reads the
//! `__typename` discriminant the object declarations carry.

use typewriter_codegen::source;
use typewriter_ir::TypeGraph;

use super::objects::TYPENAME_FIELD;
use crate::ts_type::TypeResolver;

/// Name of the exported resolver table.
pub const TABLE_NAME: &str = "defaultResolvers";

pub fn render(graph: &TypeGraph, _resolver: &TypeResolver<'_>) -> Vec<String> {
    let entries: Vec<_> = graph
        .polymorphic_types()
        .map(|ty| entry(ty.name()))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    vec![source!(
        "
export const ${} = {
    ${}
}
",
        TABLE_NAME,
        entries.join(",\n")
    )]
}

fn entry(name: &str) -> String {
    source!(
        "
${}: {
    __resolveType(obj: { ${}: string }) {
        return obj.${}
    },
}
",
        name,
        TYPENAME_FIELD,
        TYPENAME_FIELD
    )
}
