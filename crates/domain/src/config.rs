//! Client configuration
//!
//! The persisted session: which control plane is targeted, the OAuth tokens
//! for it, and the org/space subsequent commands operate in.

use serde::{Deserialize, Serialize};

use crate::types::{OrganizationFields, SpaceFields};

/// Persisted client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Control-plane API endpoint, e.g. `https://api.example.com`
    pub target: String,
    pub api_version: String,
    /// UAA base URL reported by `/v2/info`
    pub authorization_endpoint: String,
    /// Full `Authorization` header value (`<token_type> <token>`)
    pub access_token: String,
    pub refresh_token: String,
    pub organization_fields: OrganizationFields,
    pub space_fields: SpaceFields,
    pub skip_ssl_validation: bool,
    pub request_timeout_secs: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            target: String::new(),
            api_version: String::new(),
            authorization_endpoint: String::new(),
            access_token: String::new(),
            refresh_token: String::new(),
            organization_fields: OrganizationFields::default(),
            space_fields: SpaceFields::default(),
            skip_ssl_validation: false,
            request_timeout_secs: 30,
        }
    }
}

impl Configuration {
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn has_organization(&self) -> bool {
        !self.organization_fields.guid.is_empty() && !self.organization_fields.name.is_empty()
    }

    pub fn has_space(&self) -> bool {
        !self.space_fields.guid.is_empty() && !self.space_fields.name.is_empty()
    }

    /// Forget tokens and targeted org/space, keeping the endpoint settings.
    pub fn clear_session(&mut self) {
        self.access_token.clear();
        self.refresh_token.clear();
        self.organization_fields = OrganizationFields::default();
        self.space_fields = SpaceFields::default();
    }

    /// Clear only the org/space targeting.
    pub fn clear_targets(&mut self) {
        self.organization_fields = OrganizationFields::default();
        self.space_fields = SpaceFields::default();
    }
}
