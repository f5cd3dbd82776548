//! Structured error handling for the Centum core.
//!
//! Input rejections are the only user-facing failures; everything else here
//! is infrastructure trouble (storage, serialization) that callers log and
//! absorb rather than surface.

use centum_calculator::InputError;
use thiserror::Error;

/// Error type for core operations
#[derive(Error, Debug, Clone)]
pub enum CentumError {
    /// A calculation request was rejected by the input validator
    #[error("Input error: {source}")]
    Input {
        #[from]
        source: InputError,
    },

    /// Storage backend operation errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        key: Option<String>,
        operation: Option<String>,
    },

    /// Serialization and deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String, data_type: Option<String> },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CentumError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            CentumError::Input { .. } => "input",
            CentumError::Storage { .. } => "storage",
            CentumError::Serialization { .. } => "serialization",
            CentumError::Internal { .. } => "internal",
        }
    }

    /// Check if this error is recoverable by the user retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            CentumError::Input { .. } => true,
            CentumError::Storage { .. } => true, // history falls back to empty
            CentumError::Serialization { .. } => true,
            CentumError::Internal { .. } => false,
        }
    }

    /// Create a storage operation error
    pub fn storage(operation: &str, message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            key: None,
            operation: Some(operation.to_string()),
        }
    }

    /// Create a storage error scoped to a key
    pub fn storage_with_key(key: &str, operation: &str, message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            key: Some(key.to_string()),
            operation: Some(operation.to_string()),
        }
    }

    /// Create a serialization error
    pub fn serialization(data_type: &str, message: impl Into<String>) -> Self {
        Self::Serialization { message: message.into(), data_type: Some(data_type.to_string()) }
    }

    /// Create a generic internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

impl From<std::io::Error> for CentumError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("I/O error: {err}"),
            key: None,
            operation: Some(format!("{:?}", err.kind())),
        }
    }
}

impl From<serde_json::Error> for CentumError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("json", format!("JSON error: {err}"))
    }
}

/// Result type alias for core operations
pub type CentumResult<T> = Result<T, CentumError>;
