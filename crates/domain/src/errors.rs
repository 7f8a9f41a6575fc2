//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for cfkit
///
/// Local failures only: anything the server answered with a structured body
/// travels as an [`ErrorResponse`](crate::ErrorResponse) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CfError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CfError {
    /// Message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Config(message)
            | Self::Auth(message)
            | Self::InvalidInput(message)
            | Self::NotFound(message)
            | Self::Decode(message)
            | Self::Internal(message) => message,
        }
    }
}

/// Result type alias for local cfkit operations
pub type Result<T> = std::result::Result<T, CfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        assert_eq!(
            CfError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(CfError::Decode("eof".into()).to_string(), "Decode error: eof");
    }

    #[test]
    fn message_omits_category() {
        assert_eq!(CfError::Auth("token expired".into()).message(), "token expired");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&CfError::Config("missing target".into())).unwrap();
        assert_eq!(json, r#"{"type":"Config","message":"missing target"}"#);
    }
}
