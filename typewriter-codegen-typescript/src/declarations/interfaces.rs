//! Interface declarations.

use typewriter_ir::{InterfaceType, TypeGraph};

use super::field_member;
use crate::{ast::Interface, ts_type::TypeResolver};

pub fn render(graph: &TypeGraph, resolver: &TypeResolver<'_>) -> Vec<String> {
    graph
        .interfaces()
        .map(|interface| render_interface(interface, resolver))
        .collect()
}

fn render_interface(ty: &InterfaceType, resolver: &TypeResolver<'_>) -> String {
    Interface::new(&ty.name)
        .generic()
        .doc(ty.description.as_deref())
        .members(
            ty.fields
                .iter()
                .map(|field| field_member(&ty.name, field, resolver)),
        )
        .build()
}
