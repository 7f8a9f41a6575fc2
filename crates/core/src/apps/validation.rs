//! Client-side application name validation

use cfkit_domain::{ApiResponse, ApiResult};
use once_cell::sync::Lazy;
use regex::Regex;

static APP_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-zA-Z\-_]*$").expect("APP_NAME_REGEX should compile - this is a bug")
});

/// Reject names the control plane would turn into invalid hostnames.
///
/// Runs before any request is built, so an invalid name never reaches the
/// network.
pub fn validate_application_name(name: &str) -> ApiResult<()> {
    if APP_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(ApiResponse::with_message(
            "App name is invalid: name can only contain letters, numbers, underscores and hyphens",
        ))
    }
}
