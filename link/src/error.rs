//! Error types for vaga-link.

use std::fmt;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, VagaLinkError>;

/// Errors that can occur while talking to the job-board backend
#[derive(Debug)]
pub enum VagaLinkError {
    /// Connection-level failure (DNS, refused, reset)
    NetworkError(String),

    /// The request timed out
    TimeoutError(String),

    /// Client misconfiguration (missing base URL etc.)
    ConfigurationError(String),

    /// Response body could not be decoded
    SerializationError(String),

    /// The server answered with a non-success status
    ServerError { status_code: u16, message: String },

    /// Single-record fetch for an identifier that does not exist
    NotFound,
}

impl VagaLinkError {
    /// True for the missing-record case of a detail fetch
    pub fn is_not_found(&self) -> bool {
        matches!(self, VagaLinkError::NotFound)
    }
}

impl fmt::Display for VagaLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VagaLinkError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            VagaLinkError::TimeoutError(msg) => write!(f, "Timeout: {}", msg),
            VagaLinkError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            VagaLinkError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            VagaLinkError::ServerError {
                status_code,
                message,
            } => write!(f, "Server error ({}): {}", status_code, message),
            VagaLinkError::NotFound => write!(f, "Record not found"),
        }
    }
}

impl std::error::Error for VagaLinkError {}

impl From<reqwest::Error> for VagaLinkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VagaLinkError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            VagaLinkError::SerializationError(err.to_string())
        } else {
            VagaLinkError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for VagaLinkError {
    fn from(err: serde_json::Error) -> Self {
        VagaLinkError::SerializationError(err.to_string())
    }
}
