//! Scalar type tables for each target family.
//!
//! A [`TypeMap`] is built once per run and passed by reference into the
//! descriptor view. It is never mutated after construction.

use crate::model::ScalarKind;
use std::collections::BTreeMap;

const GO_TYPES: &[(ScalarKind, &str)] = &[
    (ScalarKind::Double, "float64"),
    (ScalarKind::Float, "float32"),
    (ScalarKind::Int32, "int32"),
    (ScalarKind::Int64, "int64"),
    (ScalarKind::Uint32, "uint32"),
    (ScalarKind::Uint64, "uint64"),
    (ScalarKind::Sint32, "int32"),
    (ScalarKind::Sint64, "int64"),
    (ScalarKind::Fixed32, "uint32"),
    (ScalarKind::Fixed64, "uint64"),
    (ScalarKind::Sfixed32, "int32"),
    (ScalarKind::Sfixed64, "int64"),
    (ScalarKind::Bool, "bool"),
    (ScalarKind::String, "string"),
    (ScalarKind::Bytes, "[]byte"),
];

const TYPESCRIPT_TYPES: &[(ScalarKind, &str)] = &[
    (ScalarKind::Double, "number"),
    (ScalarKind::Float, "number"),
    (ScalarKind::Int32, "number"),
    (ScalarKind::Int64, "number"),
    (ScalarKind::Uint32, "number"),
    (ScalarKind::Uint64, "number"),
    (ScalarKind::Sint32, "number"),
    (ScalarKind::Sint64, "number"),
    (ScalarKind::Fixed32, "number"),
    (ScalarKind::Fixed64, "number"),
    (ScalarKind::Sfixed32, "number"),
    (ScalarKind::Sfixed64, "number"),
    (ScalarKind::Bool, "boolean"),
    (ScalarKind::String, "string"),
    (ScalarKind::Bytes, "Uint8Array"),
];

/// Immutable mapping from scalar kinds to target-language primitive names.
#[derive(Debug, Clone)]
pub struct TypeMap {
    target: &'static str,
    entries: BTreeMap<ScalarKind, &'static str>,
}

impl TypeMap {
    /// Build a map from explicit entries.
    pub fn from_entries(
        target: &'static str,
        entries: impl IntoIterator<Item = (ScalarKind, &'static str)>,
    ) -> Self {
        Self {
            target,
            entries: entries.into_iter().collect(),
        }
    }

    /// Go primitive names.
    pub fn go() -> Self {
        Self::from_entries("go", GO_TYPES.iter().copied())
    }

    /// TypeScript primitive names.
    pub fn typescript() -> Self {
        Self::from_entries("typescript", TYPESCRIPT_TYPES.iter().copied())
    }

    /// Name of the target family, used in diagnostics.
    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn get(&self, kind: ScalarKind) -> Option<&'static str> {
        self.entries.get(&kind).copied()
    }
}
