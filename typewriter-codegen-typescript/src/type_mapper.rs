//! TypeScript type mapper implementation.

use typewriter_codegen::language::TypeMapper;
use typewriter_core::{BuiltinScalar, ScalarMap};

/// TypeScript type mapper implementation.
///
/// Built-in scalars use a fixed table; custom scalars use the configured
/// `[scalars]` table.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptTypeMapper {
    scalars: ScalarMap,
}

impl TypeScriptTypeMapper {
    pub fn new(scalars: ScalarMap) -> Self {
        Self { scalars }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_builtin_scalar(&self, scalar: BuiltinScalar) -> &'static str {
        match scalar {
            BuiltinScalar::String => "string",
            BuiltinScalar::Int => "number",
            BuiltinScalar::Float => "number",
            BuiltinScalar::Boolean => "boolean",
            BuiltinScalar::Id => "string",
        }
    }

    fn map_custom_scalar(&self, name: &str) -> Option<&str> {
        self.scalars.get(name)
    }
}
