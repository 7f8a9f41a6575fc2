//! Error classifiers
//!
//! Turn the status and body of a non-2xx response into an [`ErrorResponse`].
//! Each server speaks its own error dialect, so each gateway is bound to one
//! classifier. Bodies that are empty or not JSON still classify, keyed only
//! by status code.

use cfkit_domain::constants::INVALID_AUTH_TOKEN;
use cfkit_domain::ErrorResponse;
use serde::Deserialize;

/// Error code the classifiers report for an expired or invalid access token.
pub const INVALID_TOKEN_CODE: &str = "GATEWAY INVALID TOKEN CODE";

const UAA_INVALID_TOKEN: &str = "invalid_token";

/// Classifier signature: `(status, body) -> ErrorResponse`.
pub type ErrorHandler = fn(u16, &[u8]) -> ErrorResponse;

/// `code` arrives either as a number or as a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorCode {
    Number(i64),
    Text(String),
}

impl ErrorCode {
    fn into_string(self) -> String {
        match self {
            Self::Number(code) => code.to_string(),
            Self::Text(code) => code,
        }
    }
}

#[derive(Deserialize)]
struct CloudControllerErrorBody {
    code: Option<ErrorCode>,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize)]
struct UaaErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

fn fallback(status_code: u16) -> ErrorResponse {
    ErrorResponse::new(status_code, "", format!("Server error, status code: {status_code}"))
}

/// Classifier for the cloud controller: `{"code": .., "description": ..}`.
pub fn cloud_controller_error_handler(status_code: u16, body: &[u8]) -> ErrorResponse {
    let Ok(parsed) = serde_json::from_slice::<CloudControllerErrorBody>(body) else {
        return fallback(status_code);
    };

    let Some(code) = parsed.code.map(ErrorCode::into_string) else {
        return fallback(status_code);
    };

    let error_code = if code == INVALID_AUTH_TOKEN { INVALID_TOKEN_CODE.to_string() } else { code };
    ErrorResponse::new(status_code, error_code, parsed.description)
}

/// Classifier for the UAA: `{"error": .., "error_description": ..}`.
pub fn uaa_error_handler(status_code: u16, body: &[u8]) -> ErrorResponse {
    let Ok(parsed) = serde_json::from_slice::<UaaErrorBody>(body) else {
        return fallback(status_code);
    };

    if parsed.error.is_empty() {
        return fallback(status_code);
    }

    let error_code =
        if parsed.error == UAA_INVALID_TOKEN { INVALID_TOKEN_CODE.to_string() } else { parsed.error };
    ErrorResponse::new(status_code, error_code, parsed.error_description)
}
