//! cmdgen-transport - protoc plugin envelope layer
//!
//! This crate provides:
//! - [`decode_request`] / [`encode_response`] for the wire envelopes
//! - [`file_unit`] to normalize a `FileDescriptorProto` into a [`FileUnit`](cmdgen_core::FileUnit)
//! - [`GenerationRequest`] and [`GenerationResponse`] for the run boundary
//! - [`CodecError`] for envelope failures

mod codec;
mod convert;
mod envelope;

pub use codec::{CodecError, decode_request, encode_response};
pub use convert::{enum_type, field, file_unit, message_type};
pub use envelope::{GenerationRequest, GenerationResponse};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodecError, GenerationRequest, GenerationResponse};
}
