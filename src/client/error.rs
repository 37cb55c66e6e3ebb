//! # Client Error Types
//!
//! Unified error handling for backend API operations.

use crate::error::PoaError;
use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for backend API operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Backend rejected the request: {status} - {message}")]
    BackendRejected { status: u16, message: String },

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },
}

impl ClientError {
    /// Create a rejection error carrying the backend's response verbatim
    pub fn backend_rejected(status: u16, message: impl Into<String>) -> Self {
        Self::BackendRejected {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

impl From<ClientError> for PoaError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::BackendRejected { status, message } => {
                PoaError::BackendRejected(format!("{status} - {message}"))
            }
            ClientError::ConfigError(msg) => PoaError::ConfigurationError(msg),
            other => PoaError::ApiError(format!("{other}")),
        }
    }
}
