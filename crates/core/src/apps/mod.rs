//! Applications, stacks and application-name rules

pub mod ports;
pub mod validation;

pub use validation::validate_application_name;

/// Attributes of an application to create
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppParams {
    pub name: String,
    pub buildpack_url: Option<String>,
    pub stack_guid: Option<String>,
    pub command: Option<String>,
    /// In megabytes
    pub memory: u64,
    pub instances: u32,
}

impl AppParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), memory: 128, instances: 1, ..Default::default() }
    }
}
