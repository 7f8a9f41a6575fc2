//! Port interfaces for authentication
//!
//! `TokenRefresher` is the one capability the gateway consumes: when the
//! control plane rejects a token as invalid, the gateway asks for a fresh one
//! and retries the request once.

use async_trait::async_trait;
use cfkit_domain::{ApiResult, Result};

use super::PasswordScore;

/// Supplies a fresh `Authorization` header value
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    /// Obtain a new access token, persist it, and return the full header
    /// value (`<token_type> <token>`)
    ///
    /// `rejected_token` is the header value the server refused. When the
    /// stored token already differs from it, that token is returned as-is.
    async fn refresh_auth_token(&self, rejected_token: &str) -> Result<String>;
}

/// OAuth login against the UAA
#[async_trait]
pub trait AuthenticationRepository: TokenRefresher {
    /// Password grant; stores the resulting tokens in the session
    async fn authenticate(&self, username: &str, password: &str) -> ApiResult<()>;
}

/// Control-plane endpoint selection
#[async_trait]
pub trait EndpointRepository: Send + Sync {
    /// Point the client at `endpoint`, clearing the previous session
    async fn update_endpoint(&self, endpoint: &str) -> ApiResult<()>;
}

#[async_trait]
pub trait PasswordRepository: Send + Sync {
    /// Rate a candidate password against the server's policy
    async fn get_score(&self, password: &str) -> ApiResult<PasswordScore>;

    async fn update_password(&self, old_password: &str, new_password: &str) -> ApiResult<()>;
}
