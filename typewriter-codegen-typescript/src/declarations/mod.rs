//! One module per section of the generated declaration file.
//!
//! Every section renders to a list of declarations, in graph order. The
//! [`Renderer`](crate::Renderer) drops empty sections and joins the rest.

pub mod arguments;
pub mod enums;
pub mod input_objects;
pub mod interfaces;
pub mod objects;
pub mod preamble;
pub mod resolvers;
pub mod unions;

use typewriter_ir::{Field, TypeGraph};

use crate::{
    ast::Member,
    ts_type::{CONTEXT_PARAM, TypeResolver},
};

/// Renders one section.
pub type RenderSection = fn(&TypeGraph, &TypeResolver<'_>) -> Vec<String>;

/// A named section of the output.
#[derive(Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub render: RenderSection,
}

/// Sections after the preamble, in output order.
pub const SECTIONS: [Section; 7] = [
    Section {
        name: "objects",
        render: objects::render,
    },
    Section {
        name: "arguments",
        render: arguments::render,
    },
    Section {
        name: "input objects",
        render: input_objects::render,
    },
    Section {
        name: "enums",
        render: enums::render,
    },
    Section {
        name: "unions",
        render: unions::render,
    },
    Section {
        name: "interfaces",
        render: interfaces::render,
    },
    Section {
        name: "resolvers",
        render: resolvers::render,
    },
];

/// The member for an object or interface field.
///
/// `name[?]: GraphqlField<Parent<Ctx>, Args, Result, Ctx>`
pub(crate) fn field_member(parent: &str, field: &Field, resolver: &TypeResolver<'_>) -> Member {
    let args = if field.has_args() {
        arguments::type_name(&field.name)
    } else {
        "{}".to_string()
    };
    let ty = format!(
        "{field}<{parent}<{ctx}>, {args}, {result}, {ctx}>",
        field = preamble::FIELD_TYPE,
        parent = parent,
        ctx = CONTEXT_PARAM,
        args = args,
        result = resolver.resolve(&field.ty, true),
    );

    Member::new(&field.name, ty)
        .doc(field.description.as_deref())
        .optional(!field.ty.is_non_null())
}
