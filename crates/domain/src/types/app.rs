//! Applications, their running instances and lifecycle events

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RouteSummary;
use crate::impl_domain_status_conversions;

/// Scalar attributes of an application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFields {
    pub guid: String,
    pub name: String,
    /// Lower-cased desired state (`started`, `stopped`)
    pub state: String,
    pub command: String,
    pub buildpack_url: String,
    pub instances: u32,
    pub running_instances: u32,
    /// In megabytes
    pub memory: u64,
    /// In megabytes
    pub disk_quota: u64,
    pub environment_vars: BTreeMap<String, String>,
}

impl fmt::Display for ApplicationFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub fields: ApplicationFields,
    pub stack: Stack,
    pub routes: Vec<RouteSummary>,
}

/// Application plus instance and route details
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppSummary {
    pub app: ApplicationFields,
    pub instances: Vec<ApplicationInstance>,
    pub route_summaries: Vec<RouteSummary>,
}

/// State of a single running instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Starting,
    Running,
    Flapping,
    Down,
    Crashed,
    #[default]
    Unknown,
}

impl_domain_status_conversions!(InstanceState {
    Starting => "starting",
    Running => "running",
    Flapping => "flapping",
    Down => "down",
    Crashed => "crashed",
    Unknown => "unknown",
});

impl InstanceState {
    /// Parse a server-reported state, mapping anything unrecognized to `Unknown`.
    pub fn from_server(value: &str) -> Self {
        value.parse().unwrap_or(Self::Unknown)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationInstance {
    pub state: InstanceState,
    pub since: Option<DateTime<Utc>>,
    /// Percentage, 0.0 to 1.0 per core
    pub cpu_usage: f64,
    /// In bytes
    pub disk_quota: u64,
    pub disk_usage: u64,
    pub mem_quota: u64,
    pub mem_usage: u64,
}

/// Application crash event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub instance_index: i64,
    pub timestamp: DateTime<Utc>,
    pub exit_description: String,
    pub exit_status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    pub guid: String,
    pub name: String,
    pub description: String,
}
