//! Organizations, spaces and quotas

use std::fmt;

use super::{ApplicationFields, DomainFields, ServiceInstanceFields};

named_fields!(
    /// Scalar attributes of an organization
    OrganizationFields
);

named_fields!(
    /// Scalar attributes of a space
    SpaceFields
);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub fields: OrganizationFields,
    pub spaces: Vec<SpaceFields>,
    pub domains: Vec<DomainFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub fields: SpaceFields,
    pub organization: OrganizationFields,
    pub applications: Vec<ApplicationFields>,
    pub service_instances: Vec<ServiceInstanceFields>,
    pub domains: Vec<DomainFields>,
}

/// Organization quota definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quota {
    pub guid: String,
    pub name: String,
    /// In megabytes
    pub memory_limit: u64,
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_display_as_name() {
        assert_eq!(OrganizationFields::new("org-guid", "my-org").to_string(), "my-org");
        assert_eq!(SpaceFields::new("space-guid", "dev").to_string(), "dev");
    }

    #[test]
    fn fields_tolerate_missing_keys() {
        let org: OrganizationFields = serde_json::from_str(r#"{"name":"my-org"}"#).unwrap();
        assert_eq!(org, OrganizationFields::new("", "my-org"));
    }
}
