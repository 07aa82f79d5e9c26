//! Scalar types known to every GraphQL schema, plus user-configured ones.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The scalars every GraphQL schema provides.
///
/// This is a language-agnostic representation of the built-in scalars.
/// Use a `TypeMapper` to convert them to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinScalar {
    String,
    Int,
    Float,
    Boolean,
    Id,
}

impl BuiltinScalar {
    /// All built-in scalars, in GraphQL declaration order.
    pub const ALL: [BuiltinScalar; 5] = [
        BuiltinScalar::String,
        BuiltinScalar::Int,
        BuiltinScalar::Float,
        BuiltinScalar::Boolean,
        BuiltinScalar::Id,
    ];

    /// Look up a built-in scalar by its GraphQL name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(BuiltinScalar::String),
            "Int" => Some(BuiltinScalar::Int),
            "Float" => Some(BuiltinScalar::Float),
            "Boolean" => Some(BuiltinScalar::Boolean),
            "ID" => Some(BuiltinScalar::Id),
            _ => None,
        }
    }

    /// Get the GraphQL name of this scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinScalar::String => "String",
            BuiltinScalar::Int => "Int",
            BuiltinScalar::Float => "Float",
            BuiltinScalar::Boolean => "Boolean",
            BuiltinScalar::Id => "ID",
        }
    }
}

/// Target types for custom scalars, keyed by scalar name.
///
/// Loaded from the `[scalars]` table of `typewriter.toml`. Insertion order is
/// preserved so diagnostics and dumps stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScalarMap(IndexMap<String, String>);

impl ScalarMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the target type of a custom scalar.
    pub fn with(mut self, scalar: impl Into<String>, target: impl Into<String>) -> Self {
        self.0.insert(scalar.into(), target.into());
        self
    }

    /// Get the configured target type for a custom scalar.
    pub fn get(&self, scalar: &str) -> Option<&str> {
        self.0.get(scalar).map(String::as_str)
    }

    /// Returns true if `scalar` is built-in or has a configured target type.
    pub fn covers(&self, scalar: &str) -> bool {
        BuiltinScalar::from_name(scalar).is_some() || self.0.contains_key(scalar)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ScalarMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
