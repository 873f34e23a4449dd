//! Request and response envelopes for one plugin run

use crate::codec::{CodecError, decode_request, encode_response};
use crate::convert::file_unit;
use cmdgen_core::{FileUnit, GenError, GenResult, GeneratedFile};
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

/// The normalized input of a run.
///
/// `files` holds only the files protoc asked to generate, in the order they
/// appear in the request's descriptor list. Imported dependencies are never
/// converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Files to generate, normalized.
    pub files: Vec<FileUnit>,

    /// Raw parameter string (`--cmd_out=<parameter>:<dir>`).
    pub parameter: String,
}

impl GenerationRequest {
    /// Decode and normalize a request from its wire bytes
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        Self::from_proto(decode_request(data)?)
    }

    /// Normalize a decoded request
    ///
    /// Every name in `file_to_generate` must have a descriptor.
    pub fn from_proto(request: CodeGeneratorRequest) -> Result<Self, CodecError> {
        if let Some(missing) = request
            .file_to_generate
            .iter()
            .find(|name| !request.proto_file.iter().any(|f| f.name() == name.as_str()))
        {
            return Err(CodecError::UnknownFile(missing.clone()));
        }

        let files = request
            .proto_file
            .iter()
            .filter(|f| request.file_to_generate.iter().any(|name| name == f.name()))
            .map(file_unit)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            requested = request.file_to_generate.len(),
            descriptors = request.proto_file.len(),
            converted = files.len(),
            "normalized request"
        );

        Ok(Self {
            files,
            parameter: request.parameter.unwrap_or_default(),
        })
    }

    /// Files to generate, failing when protoc named none
    pub fn selected_files(&self) -> GenResult<&[FileUnit]> {
        if self.files.is_empty() {
            return Err(GenError::NoFilesToGenerate);
        }
        Ok(&self.files)
    }
}

/// The outcome of a run, as reported back to protoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResponse {
    /// Generated artifacts, in output order
    Success(Vec<GeneratedFile>),

    /// A schema-level failure; protoc prints the message and fails the build
    Failure(String),
}

impl GenerationResponse {
    pub fn success(files: Vec<GeneratedFile>) -> Self {
        GenerationResponse::Success(files)
    }

    pub fn failure(err: &GenError) -> Self {
        GenerationResponse::Failure(err.to_string())
    }

    /// Build the wire response
    ///
    /// A failure carries no files, only the error text.
    pub fn to_proto(&self) -> CodeGeneratorResponse {
        let supported_features = Some(Feature::Proto3Optional as u64);
        match self {
            GenerationResponse::Success(files) => CodeGeneratorResponse {
                supported_features,
                file: files
                    .iter()
                    .map(|f| File {
                        name: Some(f.name.clone()),
                        content: Some(f.content.clone()),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            },
            GenerationResponse::Failure(message) => CodeGeneratorResponse {
                error: Some(message.clone()),
                supported_features,
                ..Default::default()
            },
        }
    }

    /// Serialize to wire bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_response(&self.to_proto())
    }
}

impl From<GenResult<Vec<GeneratedFile>>> for GenerationResponse {
    fn from(result: GenResult<Vec<GeneratedFile>>) -> Self {
        match result {
            Ok(files) => GenerationResponse::success(files),
            Err(err) => GenerationResponse::failure(&err),
        }
    }
}

#[cfg(test)]
#[path = "envelope/envelope_tests.rs"]
mod envelope_tests;
