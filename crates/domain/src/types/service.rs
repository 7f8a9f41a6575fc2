//! Service offerings, plans, instances and bindings

use std::collections::BTreeMap;
use std::fmt;

named_fields!(
    /// Scalar attributes of a service plan
    ServicePlanFields
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicePlan {
    pub fields: ServicePlanFields,
    pub service_offering: ServiceOfferingFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOfferingFields {
    pub guid: String,
    pub label: String,
    pub provider: String,
    pub version: String,
    pub description: String,
    pub documentation_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOffering {
    pub fields: ServiceOfferingFields,
    pub plans: Vec<ServicePlanFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInstanceFields {
    pub guid: String,
    pub name: String,
    pub syslog_drain_url: String,
    pub application_names: Vec<String>,
    /// Credentials of a user-provided instance
    pub params: BTreeMap<String, String>,
}

impl fmt::Display for ServiceInstanceFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceInstance {
    pub fields: ServiceInstanceFields,
    pub service_bindings: Vec<ServiceBinding>,
    pub service_plan: ServicePlanFields,
    pub service_offering: ServiceOfferingFields,
}

impl ServiceInstance {
    /// User-provided instances have no plan.
    pub fn is_user_provided(&self) -> bool {
        self.service_plan.guid.is_empty()
    }

    pub fn binding_for_app(&self, app_guid: &str) -> Option<&ServiceBinding> {
        self.service_bindings.iter().find(|binding| binding.app_guid == app_guid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceBinding {
    pub guid: String,
    pub url: String,
    pub app_guid: String,
}
