//! Conversion from compiler descriptors to the normalized model.
//!
//! Only the facts the emitters need survive: names, field types and
//! cardinality, enum constants, syntax and the two package options.
//! Nested types, services and source info are dropped.

use crate::codec::CodecError;
use cmdgen_core::{
    EnumType, EnumValue, Field, FieldType, FileOptions, FileUnit, Label, MessageType, ScalarKind,
    Syntax,
};
use prost_types::field_descriptor_proto::{Label as ProtoLabel, Type};
use prost_types::{DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto};

/// Normalize one file descriptor.
pub fn file_unit(file: &FileDescriptorProto) -> Result<FileUnit, CodecError> {
    let name = file.name();
    if name.is_empty() {
        return Err(CodecError::InvalidDescriptor("file without a name".into()));
    }

    let messages = file
        .message_type
        .iter()
        .map(|message| message_type(name, message))
        .collect::<Result<Vec<_>, _>>()?;
    let enums = file
        .enum_type
        .iter()
        .map(|e| enum_type(name, e))
        .collect::<Result<Vec<_>, _>>()?;
    let options = file
        .options
        .as_ref()
        .map(|o| FileOptions {
            go_package: o.go_package.clone().filter(|p| !p.is_empty()),
            java_package: o.java_package.clone().filter(|p| !p.is_empty()),
        })
        .unwrap_or_default();

    Ok(FileUnit {
        name: name.to_string(),
        package: file.package().to_string(),
        syntax: Syntax::from_descriptor(file.syntax()),
        messages,
        enums,
        options,
    })
}

/// Normalize one top-level message of `file`.
pub fn message_type(file: &str, message: &DescriptorProto) -> Result<MessageType, CodecError> {
    let name = message.name();
    if name.is_empty() {
        return Err(CodecError::InvalidDescriptor(format!("message without a name in {file}")));
    }

    let fields = message
        .field
        .iter()
        .map(|f| field(name, f))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MessageType {
        name: name.to_string(),
        fields,
    })
}

/// Normalize one top-level enum of `file`.
pub fn enum_type(file: &str, descriptor: &EnumDescriptorProto) -> Result<EnumType, CodecError> {
    let name = descriptor.name();
    if name.is_empty() {
        return Err(CodecError::InvalidDescriptor(format!("enum without a name in {file}")));
    }

    Ok(EnumType {
        name: name.to_string(),
        values: descriptor
            .value
            .iter()
            .map(|v| EnumValue {
                name: v.name().to_string(),
                number: v.number(),
            })
            .collect(),
    })
}

/// Normalize one field of `message`.
///
/// A field without a type but with a type name is a message reference, as
/// some descriptor producers leave the type to be resolved later.
pub fn field(message: &str, descriptor: &FieldDescriptorProto) -> Result<Field, CodecError> {
    let invalid = |reason: &str| {
        CodecError::InvalidDescriptor(format!("{message}.{}: {reason}", descriptor.name()))
    };

    let type_name = || descriptor.type_name().to_string();
    let ty = match descriptor.r#type {
        None if descriptor.type_name.is_some() => FieldType::Message(type_name()),
        None => return Err(invalid("missing type")),
        Some(raw) => match Type::try_from(raw) {
            Ok(Type::Message) => FieldType::Message(type_name()),
            Ok(Type::Enum) => FieldType::Enum(type_name()),
            Ok(Type::Group) => FieldType::Group(type_name()),
            Ok(scalar) => match scalar_kind(scalar) {
                Some(kind) => FieldType::Scalar(kind),
                None => return Err(invalid("bad type")),
            },
            Err(_) => return Err(invalid(&format!("unknown type {raw}"))),
        },
    };

    let label = if descriptor.label() == ProtoLabel::Repeated {
        Label::Repeated
    } else {
        Label::Singular
    };

    Ok(Field {
        name: descriptor.name().to_string(),
        ty,
        label,
    })
}

fn scalar_kind(ty: Type) -> Option<ScalarKind> {
    let kind = match ty {
        Type::Double => ScalarKind::Double,
        Type::Float => ScalarKind::Float,
        Type::Int64 => ScalarKind::Int64,
        Type::Uint64 => ScalarKind::Uint64,
        Type::Int32 => ScalarKind::Int32,
        Type::Fixed64 => ScalarKind::Fixed64,
        Type::Fixed32 => ScalarKind::Fixed32,
        Type::Bool => ScalarKind::Bool,
        Type::String => ScalarKind::String,
        Type::Bytes => ScalarKind::Bytes,
        Type::Uint32 => ScalarKind::Uint32,
        Type::Sfixed32 => ScalarKind::Sfixed32,
        Type::Sfixed64 => ScalarKind::Sfixed64,
        Type::Sint32 => ScalarKind::Sint32,
        Type::Sint64 => ScalarKind::Sint64,
        Type::Group | Type::Message | Type::Enum => return None,
    };
    Some(kind)
}
