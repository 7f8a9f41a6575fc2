//! Shared fixtures for infra integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use cfkit_core::{ConfigRepository, Session, TokenRefresher};
use cfkit_domain::{CfError, Configuration, OrganizationFields, Result, SpaceFields};
use cfkit_infra::{Gateway, HttpClient};
use parking_lot::Mutex;
use serde_json::{json, Value};

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("cfkit_infra=debug"))
            .with_test_writer()
            .try_init();
    });
}

/// Session targeting `target` with an org, a space and an old token pair.
pub fn targeted_session(target: &str) -> Session {
    Session::new(Configuration {
        target: target.to_string(),
        authorization_endpoint: target.to_string(),
        access_token: "bearer old-token".to_string(),
        refresh_token: "old-refresh".to_string(),
        organization_fields: OrganizationFields::new("my-org-guid", "my-org"),
        space_fields: SpaceFields::new("my-space-guid", "my-space"),
        ..Default::default()
    })
}

pub fn cloud_controller() -> Gateway {
    Gateway::cloud_controller(HttpClient::new().expect("http client should build"))
}

pub fn uaa() -> Gateway {
    Gateway::uaa(HttpClient::new().expect("http client should build"))
}

/// Cloud-controller error body.
pub fn cc_error(code: u32, description: &str) -> Value {
    json!({ "code": code, "description": description, "error_code": "CF-Error" })
}

/// One page of a paginated listing.
pub fn page(next_url: Option<&str>, resources: Vec<Value>) -> Value {
    json!({
        "total_results": resources.len(),
        "next_url": next_url,
        "resources": resources,
    })
}

pub fn named_resource(guid: &str, name: &str) -> Value {
    json!({ "metadata": { "guid": guid, "url": format!("/v2/things/{guid}") }, "entity": { "name": name } })
}

/// Token refresher that hands out a fixed token and counts calls.
pub struct FakeRefresher {
    session: Option<Session>,
    token: std::result::Result<String, CfError>,
    calls: AtomicUsize,
}

impl FakeRefresher {
    pub fn returning(token: &str) -> Arc<Self> {
        Arc::new(Self { session: None, token: Ok(token.to_string()), calls: AtomicUsize::new(0) })
    }

    /// Also writes the new token into `session`, as the UAA repository does.
    pub fn updating(session: &Session, token: &str) -> Arc<Self> {
        Arc::new(Self {
            session: Some(session.clone()),
            token: Ok(token.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            session: None,
            token: Err(CfError::Auth("refresh token expired".into())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenRefresher for FakeRefresher {
    async fn refresh_auth_token(&self, _rejected_token: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let token = self.token.clone()?;
        if let Some(session) = &self.session {
            session.set_tokens(token.clone(), "new-refresh".into());
        }
        Ok(token)
    }
}

/// In-memory config store recording every save.
#[derive(Default)]
pub struct MemoryConfigStore {
    saved: Mutex<Vec<Configuration>>,
}

impl MemoryConfigStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn saves(&self) -> Vec<Configuration> {
        self.saved.lock().clone()
    }

    pub fn last_saved(&self) -> Option<Configuration> {
        self.saved.lock().last().cloned()
    }
}

impl ConfigRepository for MemoryConfigStore {
    fn load(&self) -> Result<Configuration> {
        Ok(self.last_saved().unwrap_or_default())
    }

    fn save(&self, config: &Configuration) -> Result<()> {
        self.saved.lock().push(config.clone());
        Ok(())
    }
}
