use cfkit_domain::{Domain, DomainFields, Route, RouteFields, RouteSummary, SpaceFields};
use serde::Deserialize;

use super::{ApplicationEntity, NamedEntity, Resource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainEntity {
    pub name: String,
    /// Absent for shared domains
    pub owning_organization_guid: Option<String>,
    pub spaces: Vec<Resource<NamedEntity>>,
}

impl Resource<DomainEntity> {
    pub fn to_fields(&self) -> DomainFields {
        let owner = self.entity.owning_organization_guid.clone().unwrap_or_default();
        DomainFields {
            guid: self.metadata.guid.clone(),
            name: self.entity.name.clone(),
            shared: owner.is_empty(),
            owning_organization_guid: owner,
        }
    }

    pub fn to_model(&self) -> Domain {
        Domain {
            fields: self.to_fields(),
            spaces: self
                .entity
                .spaces
                .iter()
                .map(|space| {
                    let (guid, name) = space.guid_and_name();
                    SpaceFields::new(guid, name)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteEntity {
    pub host: String,
    pub domain: Option<Resource<DomainEntity>>,
    pub space: Option<Resource<NamedEntity>>,
    pub apps: Vec<Resource<ApplicationEntity>>,
}

impl Resource<RouteEntity> {
    pub fn to_fields(&self) -> RouteFields {
        RouteFields { guid: self.metadata.guid.clone(), host: self.entity.host.clone() }
    }

    pub fn to_model(&self) -> Route {
        Route {
            summary: RouteSummary {
                fields: self.to_fields(),
                domain: self
                    .entity
                    .domain
                    .as_ref()
                    .map(|domain| domain.to_fields())
                    .unwrap_or_default(),
            },
            space: self
                .entity
                .space
                .as_ref()
                .map(|space| {
                    let (guid, name) = space.guid_and_name();
                    SpaceFields::new(guid, name)
                })
                .unwrap_or_default(),
            apps: self.entity.apps.iter().map(|app| app.to_fields()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_route_with_inlined_relations() {
        let resource: Resource<RouteEntity> = serde_json::from_str(
            r#"{
                "metadata": {"guid": "route-guid"},
                "entity": {
                    "host": "my-app",
                    "domain": {"metadata": {"guid": "domain-guid"}, "entity": {"name": "example.com"}},
                    "space": {"metadata": {"guid": "space-guid"}, "entity": {"name": "dev"}},
                    "apps": [{"metadata": {"guid": "app-guid"}, "entity": {"name": "my-app", "state": "STOPPED"}}]
                }
            }"#,
        )
        .unwrap();

        let route = resource.to_model();
        assert_eq!(route.url(), "my-app.example.com");
        assert_eq!(route.space, SpaceFields::new("space-guid", "dev"));
        assert_eq!(route.apps.len(), 1);
        assert_eq!(route.apps[0].state, "stopped");
    }

    #[test]
    fn route_without_relations_has_empty_collections() {
        let resource: Resource<RouteEntity> =
            serde_json::from_str(r#"{"metadata": {"guid": "r"}, "entity": {"host": "h"}}"#).unwrap();
        let route = resource.to_model();

        assert!(route.apps.is_empty());
        assert_eq!(route.summary.domain, DomainFields::default());
    }

    #[test]
    fn private_domain_is_not_shared() {
        let resource: Resource<DomainEntity> = serde_json::from_str(
            r#"{
                "metadata": {"guid": "domain-guid"},
                "entity": {"name": "private.example.com", "owning_organization_guid": "org-guid",
                           "spaces": [{"metadata": {"guid": "space-guid"}, "entity": {"name": "dev"}}]}
            }"#,
        )
        .unwrap();

        let domain = resource.to_model();
        assert!(!domain.fields.shared);
        assert_eq!(domain.fields.owning_organization_guid, "org-guid");
        assert_eq!(domain.spaces, vec![SpaceFields::new("space-guid", "dev")]);
    }
}
