use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use cfkit_core::{PasswordRepository, PasswordScore, Session};
use cfkit_domain::{ApiResponse, ApiResult};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use url::form_urlencoded;

use super::json_body;
use crate::net::Gateway;

/// `/v2/info` fields needed to reach the UAA
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TargetInfo {
    token_endpoint: String,
    #[serde(rename = "user")]
    user_guid: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScoreResponse {
    score: i64,
    required_score: i64,
}

/// Password scoring and change through the UAA
pub struct CloudControllerPasswordRepository {
    session: Session,
    cloud_controller: Gateway,
    uaa: Gateway,
    info: OnceCell<TargetInfo>,
}

impl CloudControllerPasswordRepository {
    pub fn new(session: Session, cloud_controller: Gateway, uaa: Gateway) -> Self {
        Self { session, cloud_controller, uaa, info: OnceCell::new() }
    }

    /// Fetched once per repository.
    async fn target_info(&self) -> ApiResult<&TargetInfo> {
        self.info
            .get_or_try_init(|| async {
                let url = format!("{}/info", self.session.target());
                self.cloud_controller.get_resource(&url, &self.session.access_token()).await
            })
            .await
    }
}

/// `user_id` claim of the JWT inside an `Authorization` value.
pub(crate) fn user_guid_from_token(access_token: &str) -> Option<String> {
    let token = access_token.split_whitespace().last()?;
    let claims = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(claims.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("user_id")?.as_str().map(str::to_string)
}

#[async_trait]
impl PasswordRepository for CloudControllerPasswordRepository {
    async fn get_score(&self, password: &str) -> ApiResult<PasswordScore> {
        let info = self.target_info().await?;

        let url = format!("{}/password/score", info.token_endpoint);
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("password", password)
            .finish()
            .into_bytes();

        let mut request = self
            .uaa
            .new_request(Method::POST, &url, &self.session.access_token(), Some(body))?
            .with_form_content();
        let (score, _): (ScoreResponse, _) = self.uaa.perform_for_json(&mut request).await?;

        Ok(PasswordScore::from_scores(score.score, score.required_score))
    }

    async fn update_password(&self, old_password: &str, new_password: &str) -> ApiResult<()> {
        let info = self.target_info().await?;
        let access_token = self.session.access_token();

        let user_guid = user_guid_from_token(&access_token)
            .or_else(|| Some(info.user_guid.clone()).filter(|guid| !guid.is_empty()))
            .ok_or_else(|| ApiResponse::with_message("Could not determine the current user"))?;

        let url = format!("{}/Users/{user_guid}/password", info.token_endpoint);
        let body = json_body(&json!({ "password": new_password, "oldPassword": old_password }))?;
        self.uaa.update_resource(&url, &access_token, Some(body)).await
    }
}
