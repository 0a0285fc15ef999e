//! Error types for the gateway client.

use ams_core::AmsError;
use thiserror::Error;

/// Errors that can occur when talking to the Artist Management System API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned an error response
    #[error("Server error ({status}): {body}")]
    ServerError {
        status: u16,
        body: serde_json::Value,
    },

    /// Invalid base URL or path
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a success response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for AmsError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => AmsError::Transport(e.to_string()),
            ClientError::ServerUnreachable(msg) => AmsError::Transport(msg),
            ClientError::ServerError { status, body } => AmsError::Api { status, body },
            ClientError::InvalidUrl(msg) => AmsError::InvalidConfig(msg),
            ClientError::ParseError(msg) => AmsError::InvalidResponse(msg),
        }
    }
}
