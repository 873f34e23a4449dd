//! Wire codec for the protoc plugin envelopes

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur while reading or interpreting an envelope
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed request envelope: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("file to generate not found in request: {0}")]
    UnknownFile(String),
}

impl CodecError {
    /// Returns a stable numeric code for the error
    pub fn error_code(&self) -> u32 {
        match self {
            CodecError::Decode(_) => 101,
            CodecError::InvalidDescriptor(_) => 102,
            CodecError::UnknownFile(_) => 103,
        }
    }
}

/// Decode a `CodeGeneratorRequest` from its wire bytes
pub fn decode_request(data: &[u8]) -> Result<CodeGeneratorRequest, CodecError> {
    let request = CodeGeneratorRequest::decode(data)?;
    tracing::trace!(
        bytes = data.len(),
        proto_files = request.proto_file.len(),
        "decoded request envelope"
    );
    Ok(request)
}

/// Encode a `CodeGeneratorResponse` to its wire bytes
pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
    response.encode_to_vec()
}
