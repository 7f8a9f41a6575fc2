//! Gateway: request execution with one-shot token refresh
//!
//! Every request is sent exactly once. When the server answers with an error
//! the bound classifier reports as an invalid token, the gateway asks its
//! token refresher for a new token, rewrites the `Authorization` header and
//! resends the buffered request one more time. No other failure is retried.

use std::fmt;
use std::sync::Arc;

use cfkit_core::TokenRefresher;
use cfkit_domain::{ApiResponse, ApiResult, CfError, ErrorResponse};
use reqwest::header::HeaderMap;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::error_handler::{
    cloud_controller_error_handler, uaa_error_handler, ErrorHandler, INVALID_TOKEN_CODE,
};
use super::request::Request;
use crate::http::HttpClient;

/// Failure of a single gateway call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No usable response: the request could not be built or sent, or the
    /// body could not be read or decoded.
    #[error(transparent)]
    Local(#[from] CfError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Server(ErrorResponse),
}

impl GatewayError {
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Server(response) => Some(response),
            Self::Local(_) => None,
        }
    }
}

impl From<GatewayError> for ApiResponse {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Local(err) => Self::with_error("", err),
            GatewayError::Server(response) => Self::with_error_response(response),
        }
    }
}

/// Executes requests against one server
#[derive(Clone)]
pub struct Gateway {
    client: HttpClient,
    error_handler: ErrorHandler,
    token_refresher: Option<Arc<dyn TokenRefresher>>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("client", &self.client)
            .field("has_token_refresher", &self.token_refresher.is_some())
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(client: HttpClient, error_handler: ErrorHandler) -> Self {
        Self { client, error_handler, token_refresher: None }
    }

    /// Gateway for the cloud controller (`/v2/...`).
    pub fn cloud_controller(client: HttpClient) -> Self {
        Self::new(client, cloud_controller_error_handler)
    }

    /// Gateway for the UAA (`/oauth/token`, `/password/score`, ...).
    pub fn uaa(client: HttpClient) -> Self {
        Self::new(client, uaa_error_handler)
    }

    #[must_use]
    pub fn with_token_refresher(mut self, refresher: Arc<dyn TokenRefresher>) -> Self {
        self.token_refresher = Some(refresher);
        self
    }

    pub fn set_token_refresher(&mut self, refresher: Arc<dyn TokenRefresher>) {
        self.token_refresher = Some(refresher);
    }

    /// Build a request, reporting failures as a local-failure status.
    pub fn new_request(
        &self,
        method: Method,
        url: &str,
        access_token: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<Request> {
        Request::new(method, url, access_token, body).map_err(|err| ApiResponse::with_error("", err))
    }

    /// Execute `request`, discarding the response body.
    #[instrument(skip_all, fields(method = %request.method(), url = %request.url()))]
    pub async fn perform(&self, request: &mut Request) -> Result<HeaderMap, GatewayError> {
        let response = self.do_request_handling_auth(request).await?;
        Ok(response.headers().clone())
    }

    #[instrument(skip_all, fields(method = %request.method(), url = %request.url()))]
    pub async fn perform_for_bytes(
        &self,
        request: &mut Request,
    ) -> Result<(Vec<u8>, HeaderMap), GatewayError> {
        let response = self.do_request_handling_auth(request).await?;
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|err| {
            CfError::Network(format!("Error reading response: {err}"))
        })?;
        Ok((bytes.to_vec(), headers))
    }

    pub async fn perform_for_text(
        &self,
        request: &mut Request,
    ) -> Result<(String, HeaderMap), GatewayError> {
        let (bytes, headers) = self.perform_for_bytes(request).await?;
        Ok((String::from_utf8_lossy(&bytes).into_owned(), headers))
    }

    /// Execute `request` and decode the 2xx body as `T`.
    pub async fn perform_for_json<T: DeserializeOwned>(
        &self,
        request: &mut Request,
    ) -> Result<(T, HeaderMap), GatewayError> {
        let (bytes, headers) = self.perform_for_bytes(request).await?;
        let value = serde_json::from_slice(&bytes).map_err(|err| {
            CfError::Decode(format!("Invalid JSON response from server: {err}"))
        })?;
        Ok((value, headers))
    }

    async fn do_request_handling_auth(
        &self,
        request: &mut Request,
    ) -> Result<Response, GatewayError> {
        let response = self.send(request).await?;
        if response.status().as_u16() <= 299 {
            return Ok(response);
        }

        let error = self.classify(response).await;
        if error.error_code != INVALID_TOKEN_CODE {
            return Err(GatewayError::Server(error));
        }

        let Some(refresher) = &self.token_refresher else {
            return Err(GatewayError::Server(error));
        };

        let token = match refresher.refresh_auth_token(request.authorization()).await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "token refresh failed");
                return Err(GatewayError::Server(error));
            }
        };

        request.set_authorization(&token)?;
        info!("retrying request with refreshed token");

        // Single retry: a second invalid-token answer is returned as-is.
        let response = self.send(request).await?;
        if response.status().as_u16() <= 299 {
            Ok(response)
        } else {
            Err(GatewayError::Server(self.classify(response).await))
        }
    }

    async fn send(&self, request: &Request) -> Result<Response, CfError> {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone());

        if let Some(body) = request.body() {
            builder = builder.body(body.to_vec());
        }

        self.client
            .send(builder)
            .await
            .map_err(|err| CfError::Network(format!("Error performing request: {}", err.message())))
    }

    async fn classify(&self, response: Response) -> ErrorResponse {
        let status = response.status().as_u16();
        let body = response.bytes().await.map(|bytes| bytes.to_vec()).unwrap_or_default();
        let error = (self.error_handler)(status, &body);
        debug!(status, error_code = %error.error_code, "server returned error");
        error
    }
}

/* -------------------------------------------------------------------------- */
/* Repository helpers */
/* -------------------------------------------------------------------------- */

impl Gateway {
    pub async fn get_resource<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
    ) -> ApiResult<T> {
        let mut request = self.new_request(Method::GET, url, access_token, None)?;
        let (value, _) = self.perform_for_json(&mut request).await?;
        Ok(value)
    }

    /// POST a JSON body, ignoring the response body.
    pub async fn create_resource(
        &self,
        url: &str,
        access_token: &str,
        body: Vec<u8>,
    ) -> ApiResult<()> {
        self.send_json(Method::POST, url, access_token, Some(body)).await
    }

    pub async fn create_resource_for_response<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        body: Vec<u8>,
    ) -> ApiResult<T> {
        self.send_json_for_response(Method::POST, url, access_token, body).await
    }

    /// PUT a body (JSON, or none for association endpoints).
    pub async fn update_resource(
        &self,
        url: &str,
        access_token: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<()> {
        self.send_json(Method::PUT, url, access_token, body).await
    }

    pub async fn update_resource_for_response<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        body: Vec<u8>,
    ) -> ApiResult<T> {
        self.send_json_for_response(Method::PUT, url, access_token, body).await
    }

    pub async fn delete_resource(&self, url: &str, access_token: &str) -> ApiResult<()> {
        let mut request = self.new_request(Method::DELETE, url, access_token, None)?;
        self.perform(&mut request).await?;
        Ok(())
    }

    async fn send_json(
        &self,
        method: Method,
        url: &str,
        access_token: &str,
        body: Option<Vec<u8>>,
    ) -> ApiResult<()> {
        let has_body = body.is_some();
        let mut request = self.new_request(method, url, access_token, body)?;
        if has_body {
            request = request.with_json_content();
        }
        self.perform(&mut request).await?;
        Ok(())
    }

    async fn send_json_for_response<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        access_token: &str,
        body: Vec<u8>,
    ) -> ApiResult<T> {
        let mut request = self.new_request(method, url, access_token, Some(body))?.with_json_content();
        let (value, _) = self.perform_for_json(&mut request).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_errors_become_failed_status() {
        let status: ApiResponse =
            GatewayError::Local(CfError::Network("Error performing request: refused".into())).into();
        assert!(matches!(status, ApiResponse::Failed { .. }));
        assert_eq!(status.message(), "Error performing request: refused");
    }

    #[test]
    fn server_errors_are_classified() {
        let status: ApiResponse =
            GatewayError::Server(ErrorResponse::new(404, "", "Unknown request")).into();
        assert!(status.is_not_found());

        let error = GatewayError::Server(ErrorResponse::new(400, "60002", "taken"));
        assert_eq!(error.error_response().map(|e| e.error_code.as_str()), Some("60002"));
        assert!(ApiResponse::from(error).is_error());
    }

    #[test]
    fn new_request_failure_is_local() {
        let gateway = Gateway::cloud_controller(HttpClient::new().unwrap());
        let status = gateway.new_request(Method::GET, "::nope::", "", None).unwrap_err();
        assert!(status.message().starts_with("Error building request:"));
        assert_eq!(status.status_code(), 0);
    }
}
