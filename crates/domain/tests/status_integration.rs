//! Integration tests for status classification and persisted configuration
//!
//! Exercises the public API the repositories and the CLI rely on: how a
//! server error becomes an `ApiResponse`, and how a config file written by
//! an older client is read back.

use cfkit_domain::constants::{NOT_FOUND_ERROR_CODES, SERVICE_INSTANCE_NAME_TAKEN};
use cfkit_domain::{ApiResponse, ApiResult, CfError, Configuration, ErrorResponse};

// ============================================================================
// Classification
// ============================================================================

#[test]
fn every_not_found_code_classifies_as_not_found() {
    for code in NOT_FOUND_ERROR_CODES {
        let status = ApiResponse::from(ErrorResponse::new(400, *code, "missing"));
        assert!(status.is_not_found(), "code {code} should be not found");
        assert_eq!(status.error_code(), *code);
    }
}

#[test]
fn other_server_codes_are_errors_with_status() {
    let status =
        ApiResponse::from(ErrorResponse::new(400, SERVICE_INSTANCE_NAME_TAKEN, "name taken"));

    assert!(status.is_error());
    assert_eq!(status.status_code(), 400);
    assert_eq!(status.message(), "name taken");
    assert_eq!(status.to_string(), "name taken");
}

#[test]
fn local_failures_have_no_status_code() {
    let status = ApiResponse::with_error("", CfError::Network("Error performing request: refused".into()));

    assert!(status.is_not_successful());
    assert!(!status.is_error());
    assert_eq!(status.status_code(), 0);
    assert_eq!(status.error(), Some(&CfError::Network("Error performing request: refused".into())));
}

#[test]
fn result_views_agree() {
    let ok: ApiResult<u8> = Ok(1);
    assert!(ApiResponse::of(&ok).is_successful());

    let failed: ApiResult<u8> = Err(ApiResponse::not_found("App", "web"));
    let status = ApiResponse::of(&failed);
    assert_eq!(status.message(), "App web not found");
    assert_eq!(status.clone().into_result(), Err(status));

    assert_eq!(ApiResponse::success().into_result(), Ok(()));
}

// ============================================================================
// Persisted configuration
// ============================================================================

#[test]
fn config_from_older_client_keeps_known_fields() {
    let config: Configuration = serde_json::from_str(
        r#"{
            "target": "https://api.example.com",
            "api_version": "2.0.0",
            "access_token": "bearer abc",
            "organization_fields": { "guid": "org-guid", "name": "my-org" },
            "legacy_field": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.target, "https://api.example.com");
    assert!(config.is_logged_in());
    assert!(config.has_organization());
    assert!(!config.has_space());
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn logout_keeps_endpoint_only() {
    let mut config = Configuration {
        target: "https://api.example.com".into(),
        authorization_endpoint: "https://login.example.com".into(),
        access_token: "bearer abc".into(),
        refresh_token: "refresh".into(),
        ..Default::default()
    };

    config.clear_session();

    assert_eq!(config.target, "https://api.example.com");
    assert_eq!(config.authorization_endpoint, "https://login.example.com");
    assert!(!config.is_logged_in());
    assert!(config.refresh_token.is_empty());
}
