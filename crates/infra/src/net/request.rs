//! Request builder
//!
//! A `Request` is an inert description of one HTTP call. The body is held
//! fully buffered so the gateway can resend it byte-for-byte after a token
//! refresh. Only the `Authorization` header is rewritten after construction.

use cfkit_domain::constants::{CLIENT_NAME, VERSION};
use cfkit_domain::CfError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use url::Url;

use crate::errors::InfraError;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `User-Agent` sent with every request.
pub fn user_agent() -> String {
    format!("{CLIENT_NAME} {VERSION} / {}", std::env::consts::OS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Build a request; `access_token` is the full header value and is
    /// omitted when empty.
    pub fn new(
        method: Method,
        url: &str,
        access_token: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Self, CfError> {
        Self::build(method, url, access_token, body).map_err(|InfraError(err)| {
            CfError::InvalidInput(format!("Error building request: {}", err.message()))
        })
    }

    fn build(
        method: Method,
        url: &str,
        access_token: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Self, InfraError> {
        let url = Url::parse(url)?;

        let mut headers = HeaderMap::new();
        if !access_token.is_empty() {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(access_token)?);
        }
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_str(&user_agent())?);

        Ok(Self { method, url, headers, body })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Current `Authorization` value, empty when unset.
    pub fn authorization(&self) -> &str {
        self.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok()).unwrap_or_default()
    }

    /// Rewrite the `Authorization` header in place.
    pub fn set_authorization(&mut self, token: &str) -> Result<(), CfError> {
        let value = HeaderValue::from_str(token)
            .map_err(|err| CfError::from(InfraError::from(err)))?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    pub fn set_header(&mut self, name: HeaderName, value: &str) -> Result<(), CfError> {
        let value = HeaderValue::from_str(value)
            .map_err(|err| CfError::from(InfraError::from(err)))?;
        self.headers.insert(name, value);
        Ok(())
    }

    pub fn with_json_content(mut self) -> Self {
        self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        self
    }

    pub fn with_form_content(mut self) -> Self {
        self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_standard_headers() {
        let request =
            Request::new(Method::GET, "https://api.example.com/v2/apps", "bearer token", None)
                .unwrap();

        assert_eq!(request.authorization(), "bearer token");
        assert_eq!(request.headers()[ACCEPT], "application/json");
        let agent = request.headers()[USER_AGENT].to_str().unwrap();
        assert!(agent.starts_with("cfkit "));
        assert!(agent.ends_with(&format!(" / {}", std::env::consts::OS)));
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn omits_authorization_for_empty_token() {
        let request = Request::new(Method::GET, "https://api.example.com/v2/info", "", None).unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.authorization(), "");
    }

    #[test]
    fn invalid_url_is_local_failure() {
        let err = Request::new(Method::GET, "not a url", "", None).unwrap_err();
        match err {
            CfError::InvalidInput(message) => {
                assert!(message.starts_with("Error building request:"), "{message}");
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn authorization_can_be_rewritten() {
        let mut request = Request::new(
            Method::POST,
            "https://api.example.com/v2/apps",
            "bearer old",
            Some(br#"{"name":"app"}"#.to_vec()),
        )
        .unwrap()
        .with_json_content();

        request.set_authorization("bearer new").unwrap();

        assert_eq!(request.authorization(), "bearer new");
        assert_eq!(request.body(), Some(br#"{"name":"app"}"#.as_slice()));
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn rejects_header_breaking_tokens() {
        let err = Request::new(Method::GET, "https://api.example.com", "bearer\nbad", None);
        assert!(matches!(err, Err(CfError::InvalidInput(_))));
    }
}
