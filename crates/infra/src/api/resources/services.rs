use std::collections::BTreeMap;

use cfkit_domain::{
    ServiceBinding, ServiceInstance, ServiceInstanceFields, ServiceOffering,
    ServiceOfferingFields, ServicePlanFields,
};
use serde::Deserialize;

use super::{json_scalar_to_string, NamedEntity, Resource};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceOfferingEntity {
    pub label: String,
    pub provider: String,
    pub version: String,
    pub description: String,
    pub documentation_url: Option<String>,
    pub service_plans: Vec<Resource<NamedEntity>>,
}

impl Resource<ServiceOfferingEntity> {
    pub fn to_fields(&self) -> ServiceOfferingFields {
        let entity = &self.entity;
        ServiceOfferingFields {
            guid: self.metadata.guid.clone(),
            label: entity.label.clone(),
            provider: entity.provider.clone(),
            version: entity.version.clone(),
            description: entity.description.clone(),
            documentation_url: entity.documentation_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_model(&self) -> ServiceOffering {
        ServiceOffering {
            fields: self.to_fields(),
            plans: self
                .entity
                .service_plans
                .iter()
                .map(|plan| {
                    let (guid, name) = plan.guid_and_name();
                    ServicePlanFields::new(guid, name)
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServicePlanEntity {
    pub name: String,
    #[serde(rename = "service")]
    pub service_offering: Option<Resource<ServiceOfferingEntity>>,
}

impl Resource<ServicePlanEntity> {
    pub fn to_fields(&self) -> ServicePlanFields {
        ServicePlanFields::new(self.metadata.guid.clone(), self.entity.name.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceBindingEntity {
    pub app_guid: String,
}

impl Resource<ServiceBindingEntity> {
    pub fn to_model(&self) -> ServiceBinding {
        ServiceBinding {
            guid: self.metadata.guid.clone(),
            url: self.metadata.url.clone(),
            app_guid: self.entity.app_guid.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceInstanceEntity {
    pub name: String,
    pub syslog_drain_url: Option<String>,
    pub credentials: Option<BTreeMap<String, serde_json::Value>>,
    pub service_plan: Option<Resource<ServicePlanEntity>>,
    pub service_bindings: Vec<Resource<ServiceBindingEntity>>,
}

impl Resource<ServiceInstanceEntity> {
    pub fn to_fields(&self) -> ServiceInstanceFields {
        ServiceInstanceFields {
            guid: self.metadata.guid.clone(),
            name: self.entity.name.clone(),
            syslog_drain_url: self.entity.syslog_drain_url.clone().unwrap_or_default(),
            application_names: Vec::new(),
            params: self
                .entity
                .credentials
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(|(key, value)| (key, json_scalar_to_string(value)))
                .collect(),
        }
    }

    pub fn to_model(&self) -> ServiceInstance {
        let plan = self.entity.service_plan.as_ref();
        ServiceInstance {
            fields: self.to_fields(),
            service_bindings: self
                .entity
                .service_bindings
                .iter()
                .map(|binding| binding.to_model())
                .collect(),
            service_plan: plan.map(|plan| plan.to_fields()).unwrap_or_default(),
            service_offering: plan
                .and_then(|plan| plan.entity.service_offering.as_ref())
                .map(|offering| offering.to_fields())
                .unwrap_or_default(),
        }
    }
}
