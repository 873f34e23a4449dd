//! Generated output files

use crate::options::Target;
use serde::Serialize;

/// One artifact produced by an emitter for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Output path relative to the plugin's output directory.
    pub name: String,

    /// Full text content.
    pub content: String,

    /// Target that produced the file.
    pub target: Target,
}

impl GeneratedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>, target: Target) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            target,
        }
    }
}
