use std::sync::Arc;

use async_trait::async_trait;
use cfkit_core::{ConfigRepository, EndpointRepository, Session};
use cfkit_domain::{ApiResponse, ApiResult};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::net::Gateway;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InfoResponse {
    api_version: String,
    authorization_endpoint: String,
}

/// Switches the targeted control plane
#[derive(Clone)]
pub struct RemoteEndpointRepository {
    session: Session,
    gateway: Gateway,
    config_repo: Arc<dyn ConfigRepository>,
}

impl RemoteEndpointRepository {
    pub fn new(session: Session, gateway: Gateway, config_repo: Arc<dyn ConfigRepository>) -> Self {
        Self { session, gateway, config_repo }
    }
}

#[async_trait]
impl EndpointRepository for RemoteEndpointRepository {
    /// Probe `<endpoint>/v2/info`, then target it with a fresh session.
    #[instrument(skip(self))]
    async fn update_endpoint(&self, endpoint: &str) -> ApiResult<()> {
        if !endpoint.starts_with("https://") && !endpoint.starts_with("http://") {
            return Err(ApiResponse::with_message(
                "API Endpoints should start with https:// or http://",
            ));
        }

        let endpoint = endpoint.trim_end_matches('/');
        let info: InfoResponse =
            self.gateway.get_resource(&format!("{endpoint}/v2/info"), "").await?;

        let config = self.session.update(|config| {
            config.clear_session();
            config.target = endpoint.to_string();
            config.api_version = info.api_version;
            config.authorization_endpoint = info.authorization_endpoint;
            config.clone()
        });

        self.config_repo.save(&config).map_err(|err| ApiResponse::with_error("", err))?;
        info!(target_url = %config.target, api_version = %config.api_version, "endpoint updated");
        Ok(())
    }
}
