use std::time::Duration;

use cfkit_domain::{CfError, Configuration};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Default request timeout when the configuration does not set one.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin HTTP transport shared by the cloud-controller and UAA gateways.
///
/// Sends each request exactly once. Retrying is the gateway's decision and it
/// only ever retries after a token refresh.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Default timeout, certificates verified.
    pub fn new() -> Result<Self, CfError> {
        Self::builder().build()
    }

    /// Client honoring `request_timeout_secs` and `skip_ssl_validation`.
    pub fn from_configuration(config: &Configuration) -> Result<Self, CfError> {
        Self::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .skip_ssl_validation(config.skip_ssl_validation)
            .build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute `builder` once.
    ///
    /// Any response, 4xx/5xx included, is `Ok`; only a missing response
    /// (refused connection, timeout, TLS failure) is an error.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, CfError> {
        let request = builder.build().map_err(|err| CfError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self.client.execute(request).await.map_err(|err| {
            debug!(%method, %url, error = %err, "no response");
            CfError::from(InfraError::from(err))
        })?;

        debug!(%method, %url, status = %response.status(), "received HTTP response");
        Ok(response)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug, Clone)]
pub struct HttpClientBuilder {
    timeout: Duration,
    skip_ssl_validation: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: DEFAULT_REQUEST_TIMEOUT, skip_ssl_validation: false }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept any server certificate.
    pub fn skip_ssl_validation(mut self, skip: bool) -> Self {
        self.skip_ssl_validation = skip;
        self
    }

    pub fn build(self) -> Result<HttpClient, CfError> {
        // Headers are set per request by the request builder.
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.skip_ssl_validation)
            .no_proxy()
            .build()
            .map_err(|err| CfError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
