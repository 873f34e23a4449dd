//! Queryable facts over a [`FileUnit`].
//!
//! Everything here is a pure function of the file: classification of command
//! messages, enum lookup, the declared application id and field type
//! resolution against a [`TypeMap`].

use crate::error::{GenError, GenResult};
use crate::model::{Field, FieldType, FileUnit, MessageType};
use crate::type_map::TypeMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the enum that declares the application id.
const APP_ENUM: &str = "App";

/// Constant inside [`APP_ENUM`] holding the id.
const APP_ID_CONSTANT: &str = "Id";

/// Application id used when the file does not declare one.
pub const DEFAULT_APP_ID: i32 = 1;

/// The three kinds of command message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Request,
    Response,
    Event,
}

impl CommandKind {
    const ALL: [CommandKind; 3] = [CommandKind::Request, CommandKind::Response, CommandKind::Event];

    /// Lowercase name suffix that selects this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            CommandKind::Request => "request",
            CommandKind::Response => "response",
            CommandKind::Event => "event",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Classify a message name by its case-insensitive suffix.
pub fn command_kind(name: &str) -> Option<CommandKind> {
    let lower = name.to_lowercase();
    CommandKind::ALL
        .into_iter()
        .find(|kind| lower.ends_with(kind.suffix()))
}

/// Whether a message name ends with `Request`, `Response` or `Event`,
/// ignoring case.
pub fn is_command_type(name: &str) -> bool {
    command_kind(name).is_some()
}

/// Strip the namespace qualifier from a type reference.
///
/// `.game.login.Item` becomes `Item`.
pub fn bare_type_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// A field type as an emitter spells it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Target-language type name, without container or pointer decoration.
    pub name: String,

    /// Whether the type is a builtin scalar.
    pub builtin: bool,

    /// Whether the type names an enum declared in the same file.
    pub is_enum: bool,
}

/// Read-only view over one file.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorView<'a> {
    file: &'a FileUnit,
}

impl<'a> DescriptorView<'a> {
    pub fn new(file: &'a FileUnit) -> Self {
        Self { file }
    }

    /// Exact-name search of the file's enums.
    pub fn is_enum_type(&self, name: &str) -> bool {
        self.file.enums.iter().any(|e| e.name == name)
    }

    /// The value of `App.Id`, or [`DEFAULT_APP_ID`] when absent.
    pub fn app_id(&self) -> i32 {
        self.file
            .enums
            .iter()
            .find(|e| e.name == APP_ENUM)
            .and_then(|e| e.values.iter().find(|v| v.name == APP_ID_CONSTANT))
            .map_or(DEFAULT_APP_ID, |v| v.number)
    }

    /// Resolve a field's type for the target described by `types`.
    ///
    /// Scalars come from the type map. References lose their qualifier and are
    /// checked against the file's enums. A scalar the map does not cover, or a
    /// reference with no name, is an [`GenError::UnmappedFieldType`].
    pub fn resolve_field_type(
        &self,
        message: &MessageType,
        field: &Field,
        types: &TypeMap,
    ) -> GenResult<ResolvedType> {
        let unmapped = || GenError::UnmappedFieldType {
            message: message.name.clone(),
            field: field.name.clone(),
            kind: field.ty.describe(),
            target: types.target(),
        };

        match &field.ty {
            FieldType::Scalar(kind) => {
                let name = types.get(*kind).ok_or_else(unmapped)?;
                Ok(ResolvedType {
                    name: name.to_string(),
                    builtin: true,
                    is_enum: false,
                })
            }
            FieldType::Message(qualified)
            | FieldType::Enum(qualified)
            | FieldType::Group(qualified) => {
                let bare = bare_type_name(qualified);
                if bare.is_empty() {
                    return Err(unmapped());
                }
                Ok(ResolvedType {
                    name: bare.to_string(),
                    builtin: false,
                    is_enum: self.is_enum_type(bare),
                })
            }
        }
    }
}
