//! Shared session state
//!
//! The access token is the only mutable state shared between concurrent
//! calls: repositories read it per request while the token-refresh path
//! rewrites it. `Session` wraps the configuration in a lock so readers always
//! see a complete `(access_token, refresh_token)` pair.

use std::sync::Arc;

use cfkit_domain::{Configuration, OrganizationFields, SpaceFields};
use parking_lot::RwLock;

/// Cloneable handle to the process configuration
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Configuration>>,
}

impl Session {
    pub fn new(config: Configuration) -> Self {
        Self { inner: Arc::new(RwLock::new(config)) }
    }

    /// Copy of the current configuration.
    pub fn snapshot(&self) -> Configuration {
        self.inner.read().clone()
    }

    pub fn target(&self) -> String {
        self.inner.read().target.clone()
    }

    pub fn access_token(&self) -> String {
        self.inner.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> String {
        self.inner.read().refresh_token.clone()
    }

    pub fn authorization_endpoint(&self) -> String {
        self.inner.read().authorization_endpoint.clone()
    }

    pub fn organization(&self) -> OrganizationFields {
        self.inner.read().organization_fields.clone()
    }

    pub fn space(&self) -> SpaceFields {
        self.inner.read().space_fields.clone()
    }

    /// Replace both tokens atomically.
    pub fn set_tokens(&self, access_token: String, refresh_token: String) {
        let mut config = self.inner.write();
        config.access_token = access_token;
        config.refresh_token = refresh_token;
    }

    /// Apply `f` under the write lock and return its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut Configuration) -> R) -> R {
        f(&mut self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let session = Session::new(Configuration {
            target: "https://api.example.com".into(),
            ..Default::default()
        });
        let other = session.clone();

        other.set_tokens("bearer new".into(), "refresh".into());

        assert_eq!(session.access_token(), "bearer new");
        assert_eq!(session.refresh_token(), "refresh");
        assert_eq!(session.target(), "https://api.example.com");
    }

    #[test]
    fn update_returns_closure_result() {
        let session = Session::default();
        let previous = session.update(|config| {
            let old = config.target.clone();
            config.target = "https://api.other.com".into();
            old
        });

        assert_eq!(previous, "");
        assert_eq!(session.snapshot().target, "https://api.other.com");
    }
}
