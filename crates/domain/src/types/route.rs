//! Routes and domains

use std::fmt;

use super::{ApplicationFields, SpaceFields};

/// Scalar attributes of a domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFields {
    pub guid: String,
    pub name: String,
    pub owning_organization_guid: String,
    pub shared: bool,
}

impl DomainFields {
    /// Full hostname for `host` under this domain; a bare domain when `host` is empty.
    pub fn url_for_host(&self, host: &str) -> String {
        if host.is_empty() {
            self.name.clone()
        } else {
            format!("{host}.{}", self.name)
        }
    }
}

impl fmt::Display for DomainFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    pub fields: DomainFields,
    pub spaces: Vec<SpaceFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFields {
    pub guid: String,
    pub host: String,
}

/// Route with its domain, as embedded in application payloads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSummary {
    pub fields: RouteFields,
    pub domain: DomainFields,
}

impl RouteSummary {
    pub fn url(&self) -> String {
        self.domain.url_for_host(&self.fields.host)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub summary: RouteSummary,
    pub space: SpaceFields,
    pub apps: Vec<ApplicationFields>,
}

impl Route {
    pub fn url(&self) -> String {
        self.summary.url()
    }
}
