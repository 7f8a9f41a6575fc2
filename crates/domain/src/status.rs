//! Outcome of a single control-plane call
//!
//! Every repository call resolves to exactly one of four states: success,
//! not-found, a structured server error, or a local failure that happened
//! before any server response was obtained. Repositories return
//! [`ApiResult<T>`]; an `Err` never carries [`ApiResponse::Success`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NOT_FOUND_ERROR_CODES;
use crate::errors::CfError;

/// Classified non-2xx response from the control plane or UAA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    /// Machine-readable code; empty when the body carried none
    pub error_code: String,
    pub description: String,
}

impl ErrorResponse {
    pub fn new(
        status_code: u16,
        error_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { status_code, error_code: error_code.into(), description: description.into() }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Server error, status code: {}, error code: {}, message: {}",
            self.status_code, self.error_code, self.description
        )
    }
}

/// Status of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Success,
    /// A named resource lookup missed.
    NotFound { message: String, error_code: String, status_code: u16 },
    /// The server answered with a structured error.
    Error { message: String, error_code: String, status_code: u16 },
    /// No server response was obtained, or the client refused the call.
    Failed { message: String, error: Option<CfError> },
}

/// Result of a repository call.
pub type ApiResult<T> = std::result::Result<T, ApiResponse>;

impl ApiResponse {
    pub const fn success() -> Self {
        Self::Success
    }

    /// Server-style error built locally (used by fakes and tests).
    pub fn new(message: impl Into<String>, error_code: impl Into<String>, status_code: u16) -> Self {
        Self::with_error_response(ErrorResponse::new(status_code, error_code, message))
    }

    /// Application-level failure without an HTTP status.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::Failed { message: message.into(), error: None }
    }

    /// Wrap a transport or serialization error.
    pub fn with_error(context: &str, error: CfError) -> Self {
        let message = if context.is_empty() {
            error.message().to_string()
        } else {
            format!("{context}: {}", error.message())
        };
        Self::Failed { message, error: Some(error) }
    }

    pub fn with_error_response(response: ErrorResponse) -> Self {
        let is_not_found = response.status_code == 404
            || NOT_FOUND_ERROR_CODES.contains(&response.error_code.as_str());

        if is_not_found {
            Self::NotFound {
                message: response.description,
                error_code: response.error_code,
                status_code: response.status_code,
            }
        } else {
            Self::Error {
                message: response.description,
                error_code: response.error_code,
                status_code: response.status_code,
            }
        }
    }

    /// Standard "`<kind> <identifier>` not found" status.
    pub fn not_found(kind: &str, identifier: &str) -> Self {
        Self::NotFound {
            message: format!("{kind} {identifier} not found"),
            error_code: String::new(),
            status_code: 0,
        }
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_not_successful(&self) -> bool {
        !self.is_successful()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success => "",
            Self::NotFound { message, .. }
            | Self::Error { message, .. }
            | Self::Failed { message, .. } => message,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::NotFound { error_code, .. } | Self::Error { error_code, .. } => error_code,
            Self::Success | Self::Failed { .. } => "",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { status_code, .. } | Self::Error { status_code, .. } => *status_code,
            Self::Success | Self::Failed { .. } => 0,
        }
    }

    /// Underlying local error, if any.
    pub fn error(&self) -> Option<&CfError> {
        match self {
            Self::Failed { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    pub fn into_result(self) -> ApiResult<()> {
        match self {
            Self::Success => Ok(()),
            failure => Err(failure),
        }
    }

    /// Status view of a repository result.
    pub fn of<T>(result: &ApiResult<T>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(status) => status.clone(),
        }
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self::Success
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "OK"),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl From<ErrorResponse> for ApiResponse {
    fn from(response: ErrorResponse) -> Self {
        Self::with_error_response(response)
    }
}
