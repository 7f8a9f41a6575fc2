//! Client constants
//!
//! Client identity plus the machine-readable error codes the control plane
//! returns that callers branch on.

/// Client name sent in the `User-Agent` header.
pub const CLIENT_NAME: &str = "cfkit";

/// Client version sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// OAuth client used against the UAA token endpoint (empty secret).
pub const UAA_CLIENT_ID: &str = "cf";

// Cloud controller error codes
pub const INVALID_AUTH_TOKEN: &str = "1000";
pub const ORG_EXISTS: &str = "30002";
pub const ORG_NOT_FOUND: &str = "30003";
pub const SPACE_EXISTS: &str = "40002";
pub const SPACE_NOT_FOUND: &str = "40004";
pub const SERVICE_INSTANCE_NAME_TAKEN: &str = "60002";
pub const SERVICE_INSTANCE_NOT_FOUND: &str = "60004";
pub const APP_BINDING_EXISTS: &str = "90003";
pub const APP_NOT_FOUND: &str = "100004";
pub const DOMAIN_NOT_FOUND: &str = "130002";
pub const ROUTE_NOT_FOUND: &str = "210002";

/// Error codes the classifier treats as "named resource does not exist".
pub const NOT_FOUND_ERROR_CODES: &[&str] = &[
    ORG_NOT_FOUND,
    SPACE_NOT_FOUND,
    SERVICE_INSTANCE_NOT_FOUND,
    APP_NOT_FOUND,
    DOMAIN_NOT_FOUND,
    ROUTE_NOT_FOUND,
];
