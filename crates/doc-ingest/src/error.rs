//! Error types for document ingestion

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ingestion errors
#[derive(Debug, Error)]
pub enum Error {
    /// Path is missing or is not the expected kind (file vs. directory)
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Path exists but does not have the extension the loader expects
    #[error("Invalid input '{}': expected a {expected} file", path.display())]
    InvalidInput { path: PathBuf, expected: String },

    /// Underlying format decoding failed
    #[error("Failed to parse file '{filename}': {message}")]
    ParseFailure { filename: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    ParseFailure,
    Config,
}

impl Error {
    /// Create a not-found error
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(path: impl AsRef<Path>, expected: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.as_ref().to_path_buf(),
            expected: expected.into(),
        }
    }

    /// Create a parse failure
    pub fn parse_failure(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::ParseFailure { .. } => ErrorKind::ParseFailure,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}
