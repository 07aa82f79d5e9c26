//! Enum declarations.
//!
//! Each enum becomes a string-literal union plus a value table of the same
//! name, so it can be used both as a type and as a value.

use typewriter_codegen::source;
use typewriter_ir::{EnumType, EnumValue, TypeGraph};

use crate::{ast::doc_comment, ts_type::TypeResolver};

pub fn render(graph: &TypeGraph, _resolver: &TypeResolver<'_>) -> Vec<String> {
    graph.enums().map(render_enum).collect()
}

fn render_enum(ty: &EnumType) -> String {
    let literals: Vec<_> = ty
        .values
        .iter()
        .map(|value| format!("'{}'", value.name))
        .collect();
    let types: Vec<_> = ty.values.iter().map(entry).collect();
    let values: Vec<_> = ty.values.iter().map(documented_entry).collect();

    source!(
        "
${}
export type ${} = ${}
export const ${}: {
    ${}
} = {
    ${}
}
",
        doc_comment(ty.description.as_deref()),
        &ty.name,
        literals.join(" | "),
        &ty.name,
        types.join("\n"),
        values.join("\n")
    )
}

fn entry(value: &EnumValue) -> String {
    format!("{name}: '{name}',", name = value.name)
}

fn documented_entry(value: &EnumValue) -> String {
    source!(
        "
${}
${}
",
        doc_comment(value.description.as_deref()),
        entry(value)
    )
}
