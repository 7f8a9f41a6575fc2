//! Port interfaces for routes and domains

use async_trait::async_trait;
use cfkit_domain::{ApiResult, Domain, DomainFields, Route, SpaceFields};

use crate::listing::Listing;

#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// All routes visible to the user, with domain, space and apps inlined
    fn list_routes(&self) -> Listing<Route>;

    async fn find_by_host(&self, host: &str) -> ApiResult<Route>;

    /// Resolves `domain_name` in the targeted space first
    async fn find_by_host_and_domain(&self, host: &str, domain_name: &str) -> ApiResult<Route>;

    /// Reserve a route in the targeted space
    async fn create(&self, host: &str, domain: &DomainFields) -> ApiResult<Route>;

    async fn create_in_space(
        &self,
        host: &str,
        domain: &DomainFields,
        space: &SpaceFields,
    ) -> ApiResult<Route>;

    async fn bind(&self, route_guid: &str, app_guid: &str) -> ApiResult<()>;

    async fn unbind(&self, route_guid: &str, app_guid: &str) -> ApiResult<()>;

    async fn delete(&self, route_guid: &str) -> ApiResult<()>;
}

#[async_trait]
pub trait DomainRepository: Send + Sync {
    fn list_domains_for_org(&self, org_guid: &str) -> Listing<Domain>;

    async fn find_by_name_in_current_space(&self, name: &str) -> ApiResult<DomainFields>;

    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> ApiResult<DomainFields>;

    /// Reserve a private domain owned by `owning_org_guid`
    async fn create(&self, name: &str, owning_org_guid: &str) -> ApiResult<DomainFields>;

    async fn map(&self, domain_guid: &str, space_guid: &str) -> ApiResult<()>;

    async fn unmap(&self, domain_guid: &str, space_guid: &str) -> ApiResult<()>;

    async fn delete(&self, domain_guid: &str) -> ApiResult<()>;
}
