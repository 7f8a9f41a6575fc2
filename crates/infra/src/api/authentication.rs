//! UAA authentication
//!
//! Password and refresh-token grants against `<authorization_endpoint>/oauth/token`.
//! Tokens are stored as the full `Authorization` header value
//! (`<token_type> <access_token>`) and persisted after every grant.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cfkit_core::{AuthenticationRepository, ConfigRepository, Session, TokenRefresher};
use cfkit_domain::constants::UAA_CLIENT_ID;
use cfkit_domain::{ApiResponse, ApiResult, CfError, Result};
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use url::form_urlencoded;

use crate::net::{Gateway, GatewayError, Request};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    refresh_token: String,
    error: Option<String>,
    error_description: String,
}

/// `Authorization` value for the `cf` OAuth client (empty secret).
fn client_credentials() -> String {
    format!("Basic {}", STANDARD.encode(format!("{UAA_CLIENT_ID}:")))
}

pub struct UaaAuthenticationRepository {
    session: Session,
    gateway: Gateway,
    config_repo: Arc<dyn ConfigRepository>,
    refresh_lock: Mutex<()>,
}

impl UaaAuthenticationRepository {
    pub fn new(session: Session, gateway: Gateway, config_repo: Arc<dyn ConfigRepository>) -> Self {
        Self { session, gateway, config_repo, refresh_lock: Mutex::new(()) }
    }

    async fn get_auth_token(&self, form: &[(&str, &str)]) -> std::result::Result<(), GatewayError> {
        let url = format!("{}/oauth/token", self.session.authorization_endpoint());
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish()
            .into_bytes();

        let mut request =
            Request::new(Method::POST, &url, &client_credentials(), Some(body))?.with_form_content();
        let (response, _): (TokenResponse, _) = self.gateway.perform_for_json(&mut request).await?;

        if let Some(code) = response.error.filter(|code| !code.is_empty()) {
            debug!(%code, "token endpoint reported an error");
            return Err(GatewayError::Local(CfError::Auth(format!(
                "Error setting configuration: {}",
                response.error_description
            ))));
        }

        let access_token = format!("{} {}", response.token_type, response.access_token);
        self.session.set_tokens(access_token, response.refresh_token);

        self.config_repo.save(&self.session.snapshot()).map_err(|err| {
            GatewayError::Local(CfError::Config(format!(
                "Error setting configuration: {}",
                err.message()
            )))
        })
    }
}

#[async_trait]
impl TokenRefresher for UaaAuthenticationRepository {
    /// Exchange the refresh token for a new access token.
    ///
    /// Concurrent callers are serialized. A caller whose rejected token has
    /// since been replaced reuses the stored token instead of refreshing again.
    async fn refresh_auth_token(&self, rejected_token: &str) -> Result<String> {
        let _guard = self.refresh_lock.lock().await;

        let current_token = self.session.access_token();
        if !current_token.is_empty() && current_token != rejected_token {
            debug!("token already refreshed by a concurrent request");
            return Ok(current_token);
        }

        let refresh_token = self.session.refresh_token();
        let form = [
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
            ("scope", ""),
        ];

        match self.get_auth_token(&form).await {
            Ok(()) => {
                info!("access token refreshed");
                Ok(self.session.access_token())
            }
            Err(err) => {
                warn!(error = %err, "refresh grant failed");
                Err(CfError::Auth(format!("Error refreshing access token: {err}")))
            }
        }
    }
}

#[async_trait]
impl AuthenticationRepository for UaaAuthenticationRepository {
    #[instrument(skip(self, password))]
    async fn authenticate(&self, username: &str, password: &str) -> ApiResult<()> {
        let form = [
            ("username", username),
            ("password", password),
            ("grant_type", "password"),
            ("scope", ""),
        ];

        match self.get_auth_token(&form).await {
            Ok(()) => Ok(()),
            Err(GatewayError::Server(response)) if response.status_code == 401 => {
                Err(ApiResponse::with_message("Password is incorrect, please try again."))
            }
            Err(err) => Err(err.into()),
        }
    }
}
