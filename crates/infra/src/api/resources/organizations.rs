use cfkit_domain::{Organization, OrganizationFields, Quota, Space, SpaceFields};
use serde::Deserialize;

use super::{ApplicationEntity, DomainEntity, NamedEntity, Resource, ServiceInstanceEntity};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrganizationEntity {
    pub name: String,
    pub spaces: Vec<Resource<NamedEntity>>,
    pub domains: Vec<Resource<DomainEntity>>,
}

impl Resource<OrganizationEntity> {
    pub fn to_fields(&self) -> OrganizationFields {
        OrganizationFields::new(self.metadata.guid.clone(), self.entity.name.clone())
    }

    pub fn to_model(&self) -> Organization {
        Organization {
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
            domains: self.entity.domains.iter().map(|domain| domain.to_fields()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpaceEntity {
    pub name: String,
    pub organization: Option<Resource<NamedEntity>>,
    pub apps: Vec<Resource<ApplicationEntity>>,
    pub domains: Vec<Resource<DomainEntity>>,
    pub service_instances: Vec<Resource<ServiceInstanceEntity>>,
}

impl Resource<SpaceEntity> {
    pub fn to_fields(&self) -> SpaceFields {
        SpaceFields::new(self.metadata.guid.clone(), self.entity.name.clone())
    }

    pub fn to_model(&self) -> Space {
        Space {
            fields: self.to_fields(),
            organization: self
                .entity
                .organization
                .as_ref()
                .map(|org| {
                    let (guid, name) = org.guid_and_name();
                    OrganizationFields::new(guid, name)
                })
                .unwrap_or_default(),
            applications: self.entity.apps.iter().map(|app| app.to_fields()).collect(),
            service_instances: self
                .entity
                .service_instances
                .iter()
                .map(|instance| instance.to_fields())
                .collect(),
            domains: self.entity.domains.iter().map(|domain| domain.to_fields()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuotaEntity {
    pub name: String,
    pub memory_limit: u64,
}

impl Resource<QuotaEntity> {
    pub fn to_model(&self) -> Quota {
        Quota {
            guid: self.metadata.guid.clone(),
            name: self.entity.name.clone(),
            memory_limit: self.entity.memory_limit,
        }
    }
}
