//! Typed failures for document edits

use crate::value::ValueKind;
use thiserror::Error;

/// Every way a checkpoint-addressed edit can fail.
///
/// All variants are detected before the document is touched, so a failed
/// operation leaves the document unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Checkpoint '{0}' does not exist")]
    UnknownCheckpoint(String),

    #[error("Path '{0}' does not exist in the document")]
    PathNotFound(String),

    #[error("Value at '{path}' is {kind}, not a sequence")]
    NotASequence { path: String, kind: ValueKind },

    #[error("Index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Type mismatch: cannot read '{input}' as {expected}")]
    TypeMismatch { expected: ValueKind, input: String },

    #[error("Unsupported type: scalar update is not defined for {0}")]
    UnsupportedType(ValueKind),

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl EditError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
