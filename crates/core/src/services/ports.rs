//! Port interfaces for services

use std::collections::BTreeMap;

use async_trait::async_trait;
use cfkit_domain::{ApiResult, ServiceInstance, ServiceInstanceFields, ServiceOffering};

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Offerings with their plans
    async fn get_service_offerings(&self) -> ApiResult<Vec<ServiceOffering>>;

    /// Create a managed instance in the targeted space.
    ///
    /// Returns `true` when an instance with the same name and plan already
    /// existed, which is treated as success.
    async fn create_service_instance(&self, name: &str, plan_guid: &str) -> ApiResult<bool>;

    async fn create_user_provided_service_instance(
        &self,
        name: &str,
        credentials: &BTreeMap<String, String>,
    ) -> ApiResult<()>;

    /// Replace credentials and syslog drain of a user-provided instance
    async fn update_user_provided_service_instance(
        &self,
        instance: &ServiceInstanceFields,
    ) -> ApiResult<()>;

    /// Look up an instance by name in the targeted space, bindings included
    async fn find_instance_by_name(&self, name: &str) -> ApiResult<ServiceInstance>;

    async fn bind_service(&self, instance_guid: &str, app_guid: &str) -> ApiResult<()>;

    /// Returns whether `app_guid` was bound at all
    async fn unbind_service(&self, instance: &ServiceInstance, app_guid: &str) -> ApiResult<bool>;

    /// Refuses while apps are still bound
    async fn delete_service(&self, instance: &ServiceInstance) -> ApiResult<()>;

    async fn rename_service(&self, instance_guid: &str, new_name: &str) -> ApiResult<()>;
}
