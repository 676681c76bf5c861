//! Error type shared by every layer of the trainer

use std::path::PathBuf;

/// Error types that can occur while loading, selecting or reviewing
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File could not be read or accessed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// An error taxonomy file is missing or malformed
    #[error("Data error in {}: {message}", path.display())]
    Data { path: PathBuf, message: String },

    /// A named category, error or problem area does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// A selection request could not be satisfied
    #[error("Selection error: {message}")]
    Selection { message: String },

    /// User input was rejected
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl TrainerError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data error for a specific file
    pub fn data(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Data {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a selection error
    pub fn selection(message: impl Into<String>) -> Self {
        Self::Selection {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type for trainer operations
pub type TrainerResult<T> = Result<T, TrainerError>;
