//! Resource decoders
//!
//! Every control-plane resource arrives wrapped in an envelope
//! `{"metadata": {...}, "entity": {...}}`. The entity structs here mirror the
//! wire shape; `to_fields`/`to_model` translate them into domain types,
//! lower-casing states, defaulting missing collections to empty and deriving
//! computed values. Decoding assumes well-formed input: shape mismatches fail
//! earlier, in the gateway.

mod applications;
mod events;
mod organizations;
mod routes;
mod services;
mod stacks;
mod summaries;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub use applications::{
    merge_instances, AppRouteEntity, ApplicationEntity, InstanceEntry, StatsEntry,
};
pub use events::EventEntity;
pub use organizations::{OrganizationEntity, QuotaEntity, SpaceEntity};
pub use routes::{DomainEntity, RouteEntity};
pub use services::{
    ServiceBindingEntity, ServiceInstanceEntity, ServiceOfferingEntity, ServicePlanEntity,
};
pub use stacks::StackEntity;
pub use summaries::{AppFromSummary, RouteFromSummary, SpaceSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub guid: String,
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// `{metadata, entity}` envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource<E> {
    #[serde(default)]
    pub metadata: Metadata,
    pub entity: E,
}

/// Entity carrying only a name (spaces, orgs and plans inlined elsewhere)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamedEntity {
    pub name: String,
}

impl Resource<NamedEntity> {
    pub fn guid_and_name(&self) -> (String, String) {
        (self.metadata.guid.clone(), self.entity.name.clone())
    }
}

/// Render a JSON scalar the way the CLI shows environment values.
pub(crate) fn json_scalar_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}
