//! Error type for document storage

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the storage layer
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine the current user's home directory")]
    Environment,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse document {}: {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document holds no JSON value at all (empty or whitespace only)
    #[error("Unexpected end of input in document {}", path.display())]
    EndOfInput { path: PathBuf },

    /// The document loaded fine but has no entry for the key
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for a missing key in an otherwise readable document
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::KeyNotFound(_))
    }

    /// Returns true when the document was empty (never stored)
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, StoreError::EndOfInput { .. })
    }
}
