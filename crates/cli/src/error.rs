//! CLI error types

use cfkit_core::RequirementError;
use cfkit_domain::{ApiResponse, CfError};
use thiserror::Error;

/// Why a command ended in `FAILED`
#[derive(Debug, Error)]
pub enum CliError {
    /// A precondition (login, org or space) is not met.
    #[error(transparent)]
    Requirement(#[from] RequirementError),

    /// The control plane, or the client-side checks in front of it, refused.
    #[error("{0}")]
    Api(ApiResponse),

    #[error("{}", .0.message())]
    Local(#[from] CfError),

    /// Invalid arguments or state the command cannot proceed from.
    #[error("{0}")]
    Usage(String),

    #[error("Error writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiResponse> for CliError {
    fn from(status: ApiResponse) -> Self {
        Self::Api(status)
    }
}
