//! Fixed text at the top of every generated file.

use typewriter_codegen::source;

/// Name of the alias every resolver field is declared with.
pub const FIELD_TYPE: &str = "GraphqlField";

/// Banner prepended to the generated file.
pub const BANNER: &str = "\
/* tslint:disable */
/* This file is generated by graphql-typewriter. Do not edit it by hand. */
import { GraphQLResolveInfo } from 'graphql'";

/// Shared aliases every other declaration builds on.
pub fn render() -> Vec<String> {
    vec!["type ID = string".to_string(), field_alias()]
}

/// A field is a plain value, a promise of one, or a resolver function.
fn field_alias() -> String {
    source!(
        "
export type ${}<Source, Args, Result, Ctx> =
    | Result
    | Promise<Result>
    | ((source: Source, args: Args, context: Ctx, info: GraphQLResolveInfo) => Result | Promise<Result>)
",
        FIELD_TYPE
    )
}
