use std::collections::{BTreeMap, HashMap};

use cfkit_domain::{
    Application, ApplicationFields, ApplicationInstance, InstanceState, RouteFields, RouteSummary,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{json_scalar_to_string, DomainEntity, Resource, StackEntity};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApplicationEntity {
    pub name: String,
    pub state: String,
    pub command: Option<String>,
    pub buildpack: Option<String>,
    pub instances: u32,
    pub memory: u64,
    pub disk_quota: u64,
    pub environment_json: Option<BTreeMap<String, serde_json::Value>>,
    pub routes: Vec<Resource<AppRouteEntity>>,
    pub stack: Option<Resource<StackEntity>>,
}

/// Route as inlined in an application payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppRouteEntity {
    #[serde(default)]
    pub host: String,
    pub domain: Resource<DomainEntity>,
}

impl Resource<ApplicationEntity> {
    pub fn to_fields(&self) -> ApplicationFields {
        let entity = &self.entity;
        ApplicationFields {
            guid: self.metadata.guid.clone(),
            name: entity.name.clone(),
            state: entity.state.to_lowercase(),
            command: entity.command.clone().unwrap_or_default(),
            buildpack_url: entity.buildpack.clone().unwrap_or_default(),
            instances: entity.instances,
            running_instances: 0,
            memory: entity.memory,
            disk_quota: entity.disk_quota,
            environment_vars: entity
                .environment_json
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, json_scalar_to_string(value)))
                .collect(),
        }
    }

    pub fn to_model(&self) -> Application {
        Application {
            fields: self.to_fields(),
            stack: self.entity.stack.as_ref().map(|stack| stack.to_model()).unwrap_or_default(),
            routes: self.entity.routes.iter().map(|route| route.to_model()).collect(),
        }
    }
}

impl Resource<AppRouteEntity> {
    pub fn to_fields(&self) -> RouteFields {
        RouteFields { guid: self.metadata.guid.clone(), host: self.entity.host.clone() }
    }

    pub fn to_model(&self) -> RouteSummary {
        RouteSummary { fields: self.to_fields(), domain: self.entity.domain.to_fields() }
    }
}

/// Value of the `/v2/apps/<guid>/instances` map
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstanceEntry {
    pub state: String,
    /// Unix seconds
    pub since: f64,
}

/// Value of the `/v2/apps/<guid>/stats` map
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsEntry {
    pub stats: InstanceStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstanceStats {
    pub disk_quota: u64,
    pub mem_quota: u64,
    pub usage: InstanceUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InstanceUsage {
    pub cpu: f64,
    pub disk: u64,
    pub mem: u64,
}

/// Index the instance and stats maps by instance number.
///
/// Keys that are not numbers, or that point past the number of reported
/// instances, are skipped.
pub fn merge_instances(
    instances: HashMap<String, InstanceEntry>,
    stats: &HashMap<String, StatsEntry>,
) -> Vec<ApplicationInstance> {
    let mut merged = vec![ApplicationInstance::default(); instances.len()];

    for (key, entry) in instances {
        let Some(slot) = key.parse::<usize>().ok().and_then(|index| merged.get_mut(index)) else {
            continue;
        };
        slot.state = InstanceState::from_server(&entry.state);
        #[allow(clippy::cast_possible_truncation)]
        let since = entry.since as i64;
        slot.since = DateTime::<Utc>::from_timestamp(since, 0);
    }

    for (key, entry) in stats {
        let Some(slot) = key.parse::<usize>().ok().and_then(|index| merged.get_mut(index)) else {
            continue;
        };
        slot.cpu_usage = entry.stats.usage.cpu;
        slot.disk_quota = entry.stats.disk_quota;
        slot.disk_usage = entry.stats.usage.disk;
        slot.mem_quota = entry.stats.mem_quota;
        slot.mem_usage = entry.stats.usage.mem;
    }

    merged
}
