//! Loading a TypeGraph from the JSON result of an introspection query.

use serde::Deserialize;
use typewriter_ir::{
    EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType, ObjectType, RootTypes,
    ScalarType, TypeDescriptor, TypeGraph, TypeKind, TypeRef, UnionType,
};

use crate::{Result, SourceContext};

/// Accepts both a raw `{"__schema": ...}` object and a full
/// `{"data": {"__schema": ...}}` response.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<SchemaWrapper>,
    #[serde(rename = "__schema")]
    schema: Option<IntrospectionSchema>,
}

#[derive(Debug, Deserialize)]
struct SchemaWrapper {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionSchema {
    query_type: Option<NamedRef>,
    mutation_type: Option<NamedRef>,
    subscription_type: Option<NamedRef>,
    types: Vec<FullType>,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullType {
    kind: String,
    name: String,
    description: Option<String>,
    fields: Option<Vec<RawField>>,
    input_fields: Option<Vec<RawInputValue>>,
    interfaces: Option<Vec<RawTypeRef>>,
    enum_values: Option<Vec<RawEnumValue>>,
    possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<RawInputValue>,
    #[serde(rename = "type")]
    ty: RawTypeRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    ty: RawTypeRef,
    default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawEnumValue {
    name: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: String,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}

/// Parse an introspection result into a TypeGraph.
pub(crate) fn load(ctx: &SourceContext) -> Result<TypeGraph> {
    let envelope: Envelope = serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))?;
    let schema = envelope
        .schema
        .or(envelope.data.map(|data| data.schema))
        .ok_or_else(|| ctx.introspection_error("no `__schema` object found"))?;

    let roots = match schema.query_type {
        Some(query) => RootTypes {
            query: query.name,
            mutation: schema.mutation_type.map(|t| t.name),
            subscription: schema.subscription_type.map(|t| t.name),
        },
        None => {
            tracing::debug!(
                "introspection result has no queryType, assuming conventional root names"
            );
            RootTypes::conventional()
        }
    };

    let types = schema
        .types
        .into_iter()
        .map(|ty| descriptor(ctx, ty))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypeGraph::new(roots, types))
}

fn descriptor(ctx: &SourceContext, ty: FullType) -> Result<TypeDescriptor> {
    let kind = TypeKind::from_introspection(&ty.kind).ok_or_else(|| {
        ctx.introspection_error(format!("type `{}` has unknown kind `{}`", ty.name, ty.kind))
    })?;

    let descriptor = match kind {
        TypeKind::Scalar => TypeDescriptor::Scalar(ScalarType {
            name: ty.name,
            description: ty.description,
        }),
        TypeKind::Object => TypeDescriptor::Object(ObjectType {
            fields: fields(ctx, ty.fields)?,
            interfaces: names(ctx, ty.interfaces)?,
            name: ty.name,
            description: ty.description,
        }),
        TypeKind::Interface => TypeDescriptor::Interface(InterfaceType {
            fields: fields(ctx, ty.fields)?,
            possible_types: names(ctx, ty.possible_types)?,
            name: ty.name,
            description: ty.description,
        }),
        TypeKind::Union => TypeDescriptor::Union(UnionType {
            possible_types: names(ctx, ty.possible_types)?,
            name: ty.name,
            description: ty.description,
        }),
        TypeKind::Enum => TypeDescriptor::Enum(EnumType {
            values: ty
                .enum_values
                .unwrap_or_default()
                .into_iter()
                .map(|value| EnumValue {
                    name: value.name,
                    description: value.description,
                })
                .collect(),
            name: ty.name,
            description: ty.description,
        }),
        TypeKind::InputObject => TypeDescriptor::InputObject(InputObjectType {
            fields: input_values(ctx, ty.input_fields.unwrap_or_default())?,
            name: ty.name,
            description: ty.description,
        }),
    };

    Ok(descriptor)
}

fn fields(ctx: &SourceContext, fields: Option<Vec<RawField>>) -> Result<Vec<Field>> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|field| {
            Ok(Field {
                args: input_values(ctx, field.args)?,
                ty: type_ref(ctx, &field.ty)?,
                name: field.name,
                description: field.description,
            })
        })
        .collect()
}

fn input_values(ctx: &SourceContext, values: Vec<RawInputValue>) -> Result<Vec<InputValue>> {
    values
        .into_iter()
        .map(|value| {
            Ok(InputValue {
                ty: type_ref(ctx, &value.ty)?,
                name: value.name,
                description: value.description,
                default_value: value.default_value,
            })
        })
        .collect()
}

/// Names of the referenced types of an `interfaces` or `possibleTypes` list.
fn names(ctx: &SourceContext, refs: Option<Vec<RawTypeRef>>) -> Result<Vec<String>> {
    refs.unwrap_or_default()
        .into_iter()
        .map(|r| {
            r.name
                .ok_or_else(|| ctx.introspection_error("type reference without a name"))
        })
        .collect()
}

fn type_ref(ctx: &SourceContext, raw: &RawTypeRef) -> Result<TypeRef> {
    let inner = || match &raw.of_type {
        Some(inner) => type_ref(ctx, inner),
        None => Err(ctx.introspection_error(format!("`{}` reference without `ofType`", raw.kind))),
    };

    match raw.kind.as_str() {
        "NON_NULL" => Ok(TypeRef::non_null(inner()?)),
        "LIST" => Ok(TypeRef::list(inner()?)),
        kind => {
            let of_kind = TypeKind::from_introspection(kind).ok_or_else(|| {
                ctx.introspection_error(format!("unknown type reference kind `{kind}`"))
            })?;
            let name = raw.name.as_deref().ok_or_else(|| {
                ctx.introspection_error(format!("`{kind}` reference without a name"))
            })?;
            Ok(TypeRef::named(name, of_kind))
        }
    }
}
