use cfkit_core::{AppEventsRepository, Listing, Session};
use cfkit_domain::Event;

use super::resources::{EventEntity, Resource};
use crate::net::Gateway;

/// Crash events of an application
#[derive(Debug, Clone)]
pub struct CloudControllerAppEventsRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerAppEventsRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }
}

impl AppEventsRepository for CloudControllerAppEventsRepository {
    fn list_events(&self, app_guid: &str) -> Listing<Event> {
        self.gateway.list_resources(
            &self.session,
            &format!("/v2/apps/{app_guid}/events"),
            |resource: Resource<EventEntity>| resource.to_model(),
        )
    }
}
