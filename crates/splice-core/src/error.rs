//! Error types for splice-core

use std::path::PathBuf;

use crate::encoding::Encoding;

/// Result type for splice-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in splice-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {path} as {encoding}: {message}")]
    Decode {
        path: PathBuf,
        encoding: Encoding,
        message: String,
    },

    #[error("Cannot decode {path} with any candidate encoding: {attempts}")]
    NoUsableEncoding { path: PathBuf, attempts: String },

    #[error("Invalid line range {start}-{end}: {reason}")]
    InvalidRange {
        start: usize,
        end: usize,
        reason: String,
    },

    #[error("Start marker {marker:?} not found")]
    StartMarkerNotFound { marker: String },

    #[error("End marker {marker:?} not found after byte {after}")]
    EndMarkerNotFound { marker: String, after: usize },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse carve manifest at {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Unknown encoding {name:?} (expected \"utf-8\" or \"utf-16\")")]
    UnknownEncoding { name: String },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }
}
