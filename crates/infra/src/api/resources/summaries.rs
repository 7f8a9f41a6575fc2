use cfkit_domain::{AppSummary, ApplicationFields, DomainFields, RouteFields, RouteSummary};
use serde::Deserialize;

/// `/v2/spaces/<guid>/summary`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpaceSummary {
    pub apps: Vec<AppFromSummary>,
}

/// App entry of a summary payload (not an envelope)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppFromSummary {
    pub guid: String,
    pub name: String,
    pub routes: Vec<RouteFromSummary>,
    pub running_instances: u32,
    pub memory: u64,
    pub instances: u32,
    pub disk_quota: u64,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteFromSummary {
    pub guid: String,
    pub host: String,
    pub domain: DomainFromSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainFromSummary {
    pub guid: String,
    pub name: String,
    pub owning_organization_guid: Option<String>,
}

impl AppFromSummary {
    pub fn to_fields(&self) -> ApplicationFields {
        ApplicationFields {
            guid: self.guid.clone(),
            name: self.name.clone(),
            state: self.state.to_lowercase(),
            instances: self.instances,
            running_instances: self.running_instances,
            memory: self.memory,
            disk_quota: self.disk_quota,
            ..Default::default()
        }
    }

    /// Summary without instance details
    pub fn to_model(&self) -> AppSummary {
        AppSummary {
            app: self.to_fields(),
            instances: Vec::new(),
            route_summaries: self.routes.iter().map(RouteFromSummary::to_model).collect(),
        }
    }
}

impl RouteFromSummary {
    pub fn to_model(&self) -> RouteSummary {
        let owner = self.domain.owning_organization_guid.clone().unwrap_or_default();
        RouteSummary {
            fields: RouteFields { guid: self.guid.clone(), host: self.host.clone() },
            domain: DomainFields {
                guid: self.domain.guid.clone(),
                name: self.domain.name.clone(),
                shared: owner.is_empty(),
                owning_organization_guid: owner,
            },
        }
    }
}
