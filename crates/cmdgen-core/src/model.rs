//! Normalized schema model.
//!
//! One [`FileUnit`] per compiled schema file. Entities are built once from the
//! request envelope and are read-only for the rest of the run.

use crate::view;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema syntax of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Syntax {
    /// Anything that is not explicitly `proto3`.
    #[default]
    Proto2,
    Proto3,
}

impl Syntax {
    /// Interpret the descriptor's syntax string. Empty means `proto2`.
    pub fn from_descriptor(syntax: &str) -> Self {
        if syntax == "proto3" {
            Syntax::Proto3
        } else {
            Syntax::Proto2
        }
    }
}

/// Protobuf scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    /// Every scalar kind, in descriptor declaration order.
    pub const ALL: [ScalarKind; 15] = [
        ScalarKind::Double,
        ScalarKind::Float,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Uint32,
        ScalarKind::Uint64,
        ScalarKind::Sint32,
        ScalarKind::Sint64,
        ScalarKind::Fixed32,
        ScalarKind::Fixed64,
        ScalarKind::Sfixed32,
        ScalarKind::Sfixed64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Bytes,
    ];

    /// Schema-language spelling of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Sint32 => "sint32",
            ScalarKind::Sint64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::Sfixed32 => "sfixed32",
            ScalarKind::Sfixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Builtin scalar.
    Scalar(ScalarKind),

    /// Reference to a message type by (possibly qualified) name.
    Message(String),

    /// Reference to an enum type by (possibly qualified) name.
    Enum(String),

    /// Legacy group, referenced like a message.
    Group(String),
}

impl FieldType {
    /// The referenced type name, for non-scalar fields.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FieldType::Scalar(_) => None,
            FieldType::Message(name) | FieldType::Enum(name) | FieldType::Group(name) => {
                Some(name)
            }
        }
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            FieldType::Scalar(kind) => kind.to_string(),
            FieldType::Message(name) => format!("message {name}"),
            FieldType::Enum(name) => format!("enum {name}"),
            FieldType::Group(name) => format!("group {name}"),
        }
    }
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Singular,
    Repeated,
}

/// A field in a message type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared in the schema.
    pub name: String,

    /// Field type.
    pub ty: FieldType,

    /// Cardinality.
    #[serde(default)]
    pub label: Label,
}

impl Field {
    /// Create a singular field.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            label: Label::Singular,
        }
    }

    /// Create a singular scalar field.
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, FieldType::Scalar(kind))
    }

    /// Mark the field as repeated.
    pub fn repeated(mut self) -> Self {
        self.label = Label::Repeated;
        self
    }

    pub fn is_repeated(&self) -> bool {
        self.label == Label::Repeated
    }
}

/// A message type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageType {
    /// Message name.
    pub name: String,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl MessageType {
    /// Create a message with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Whether the message is a request, response or event.
    pub fn is_command_type(&self) -> bool {
        view::is_command_type(&self.name)
    }
}

/// One constant of an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub number: i32,
}

/// An enum type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// Enum name.
    pub name: String,

    /// Constants in declaration order.
    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl EnumType {
    /// Create an enum with no constants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Append a constant.
    pub fn with_value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            number,
        });
        self
    }
}

/// File-level options the emitters honor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileOptions {
    /// `go_package` option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_package: Option<String>,

    /// `java_package` option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_package: Option<String>,
}

/// One compiled schema file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUnit {
    /// File name relative to the source root (e.g. `game/login.proto`).
    pub name: String,

    /// Package path (e.g. `game.login`).
    #[serde(default)]
    pub package: String,

    #[serde(default)]
    pub syntax: Syntax,

    /// Top-level messages.
    #[serde(default)]
    pub messages: Vec<MessageType>,

    /// Top-level enums.
    #[serde(default)]
    pub enums: Vec<EnumType>,

    #[serde(default)]
    pub options: FileOptions,
}

impl FileUnit {
    /// Create an empty `proto2` file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: String::new(),
            syntax: Syntax::Proto2,
            messages: Vec::new(),
            enums: Vec::new(),
            options: FileOptions::default(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_message(mut self, message: MessageType) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_enum(mut self, enum_type: EnumType) -> Self {
        self.enums.push(enum_type);
        self
    }

    pub fn with_options(mut self, options: FileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_proto3(&self) -> bool {
        self.syntax == Syntax::Proto3
    }

    /// File name with its extension removed, directories kept.
    pub fn stem(&self) -> &str {
        let base_start = self.name.rfind('/').map_or(0, |i| i + 1);
        match self.name[base_start..].rfind('.') {
            Some(dot) => &self.name[..base_start + dot],
            None => &self.name,
        }
    }

    /// A copy whose messages are ordered by name, byte-wise.
    ///
    /// Command identifiers are allocated over this order, which makes them
    /// independent of declaration order in the schema.
    pub fn with_sorted_messages(&self) -> FileUnit {
        let mut sorted = self.clone();
        sorted.messages.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
