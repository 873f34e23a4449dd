//! Error types for generation runs

use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// No output target was selected
    #[error(
        "no output target selected, candidates: cmd, pack, unpack, as, java, ts, ts.pb, ts.model, go.resp"
    )]
    NoTargets,

    /// The request did not name any file to generate
    #[error("no files to generate")]
    NoFilesToGenerate,

    /// Configuration file or parameter could not be interpreted
    #[error("configuration error: {0}")]
    Config(String),

    /// The file declares an application id the allocator cannot place
    #[error("invalid application id {app_id} in {file}")]
    InvalidAppId { file: String, app_id: i32 },

    /// An allocated identifier does not fit the generated identifier type
    #[error("command id 0x{id:X} for {message} in {file} exceeds the 32-bit identifier space")]
    CommandIdOverflow {
        file: String,
        message: String,
        id: u64,
    },

    /// A field type has no name in the active target's type map
    #[error("cannot map field {message}.{field} of type {kind} for {target}")]
    UnmappedFieldType {
        message: String,
        field: String,
        kind: String,
        target: &'static str,
    },

    /// Two messages of one file spell the same exported identifier
    #[error("messages {first} and {second} in {file} both export as {identifier}")]
    NameCollision {
        file: String,
        first: String,
        second: String,
        identifier: String,
    },

    /// Writing generated text failed
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl GenError {
    /// Returns a stable numeric code for the error
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::NoTargets => 1,
            GenError::NoFilesToGenerate => 2,
            GenError::Config(_) => 3,
            GenError::InvalidAppId { .. } => 4,
            GenError::CommandIdOverflow { .. } => 5,
            GenError::UnmappedFieldType { .. } => 6,
            GenError::Format(_) => 7,
            GenError::NameCollision { .. } => 8,
        }
    }

    /// Whether the error stems from how the run was configured rather than
    /// from the schema content.
    ///
    /// Configuration errors abort the process; schema errors are reported
    /// back to protoc inside the response envelope.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GenError::NoTargets | GenError::NoFilesToGenerate | GenError::Config(_)
        )
    }
}

impl From<toml::de::Error> for GenError {
    fn from(err: toml::de::Error) -> Self {
        GenError::Config(err.to_string())
    }
}
