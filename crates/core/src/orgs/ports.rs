//! Port interfaces for organizations and spaces

use async_trait::async_trait;
use cfkit_domain::{ApiResult, Organization, Quota, Space, SpaceFields};

use crate::listing::Listing;

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    fn list_orgs(&self) -> Listing<Organization>;

    /// Case-insensitive lookup, with spaces and domains inlined
    async fn find_by_name(&self, name: &str) -> ApiResult<Organization>;

    async fn create(&self, name: &str) -> ApiResult<()>;

    async fn rename(&self, org_guid: &str, new_name: &str) -> ApiResult<()>;

    /// Delete an org and everything in it
    async fn delete(&self, org_guid: &str) -> ApiResult<()>;

    async fn find_quota_by_name(&self, name: &str) -> ApiResult<Quota>;

    async fn update_quota(&self, org_guid: &str, quota_guid: &str) -> ApiResult<()>;
}

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    /// Spaces of the targeted org
    fn list_spaces(&self) -> Listing<Space>;

    /// Look up a space by name in the targeted org
    async fn find_by_name(&self, name: &str) -> ApiResult<Space>;

    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> ApiResult<Space>;

    /// Create a space in the targeted org
    async fn create(&self, name: &str) -> ApiResult<SpaceFields>;

    async fn rename(&self, space_guid: &str, new_name: &str) -> ApiResult<()>;

    async fn delete(&self, space_guid: &str) -> ApiResult<()>;
}
