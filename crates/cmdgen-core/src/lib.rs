//! cmdgen-core - Shared translation model for the cmdgen protoc plugin
//!
//! This crate provides everything the target emitters agree on:
//! - [`FileUnit`] and friends, the normalized view of one compiled schema file
//! - [`DescriptorView`] for classification and field type resolution
//! - [`TypeMap`] immutable scalar type tables per target family
//! - [`allocate`] / [`allocate_all`] for deterministic command identifiers
//! - [`GeneratorOptions`] and the closed [`Target`] set
//! - [`GenError`] for error handling

mod allocator;
mod artifact;
mod error;
mod model;
pub mod naming;
mod options;
mod type_map;
mod view;

pub use allocator::{
    APP_ID_STRIDE, CommandAssignment, CommandIds, allocate, allocate_all, base_offset, hex_id,
};
pub use artifact::GeneratedFile;
pub use error::{GenError, GenResult};
pub use model::{
    EnumType, EnumValue, Field, FieldType, FileOptions, FileUnit, Label, MessageType, ScalarKind,
    Syntax,
};
pub use options::{GeneratorOptions, Indent, Target, parse_parameter};
pub use type_map::TypeMap;
pub use view::{
    CommandKind, DEFAULT_APP_ID, DescriptorView, ResolvedType, bare_type_name, command_kind,
    is_command_type,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CommandIds, CommandKind, DescriptorView, FileUnit, GenError, GenResult, GeneratedFile,
        GeneratorOptions, MessageType, Target, TypeMap,
    };
}
