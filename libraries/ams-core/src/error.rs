/// Core error types for the Artist Management System
use thiserror::Error;

/// Result type alias using `AmsError`
pub type Result<T> = std::result::Result<T, AmsError>;

/// Core error type shared by the gateway, the views and the console.
///
/// Gateway failures are normalized into exactly two shapes: `Transport` when no
/// response was received, `Api` when the server answered with an error status.
#[derive(Error, Debug)]
pub enum AmsError {
    /// No response received (connection refused, DNS failure, aborted request)
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with an error status; `body` is the structured payload
    /// when the server sent JSON, otherwise the raw text as a JSON string.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    /// Server answered with success but the body had an unexpected shape
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Client-side validation failure (missing field, password mismatch)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Session data could not be written or read
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid base URL or other configuration problem
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AmsError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// The structured body of an API error, if this is one.
    pub fn api_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server answered (as opposed to a transport failure).
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
