use async_trait::async_trait;
use cfkit_core::{Listing, OrganizationRepository, Session};
use cfkit_domain::{ApiResponse, ApiResult, Organization, Quota};
use serde_json::json;
use tracing::instrument;

use super::resources::{OrganizationEntity, QuotaEntity, Resource};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

#[derive(Debug, Clone)]
pub struct CloudControllerOrganizationRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerOrganizationRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    fn org_url(&self, org_guid: &str) -> String {
        format!("{}/v2/organizations/{org_guid}", self.session.target())
    }
}

#[async_trait]
impl OrganizationRepository for CloudControllerOrganizationRepository {
    fn list_orgs(&self) -> Listing<Organization> {
        self.gateway.list_resources(
            &self.session,
            "/v2/organizations",
            |resource: Resource<OrganizationEntity>| resource.to_model(),
        )
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ApiResult<Organization> {
        let url = format!(
            "{}/v2/organizations?{}&inline-relations-depth=1",
            self.session.target(),
            filter_query(&format!("name:{}", name.to_lowercase()))
        );

        let page: PaginatedResources<Resource<OrganizationEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;

        page.resources
            .first()
            .map(|resource| resource.to_model())
            .ok_or_else(|| ApiResponse::not_found("Org", name))
    }

    async fn create(&self, name: &str) -> ApiResult<()> {
        let body = json_body(&json!({ "name": name }))?;
        self.gateway
            .create_resource(
                &format!("{}/v2/organizations", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await
    }

    async fn rename(&self, org_guid: &str, new_name: &str) -> ApiResult<()> {
        let body = json_body(&json!({ "name": new_name }))?;
        self.gateway
            .update_resource(&self.org_url(org_guid), &self.session.access_token(), Some(body))
            .await
    }

    async fn delete(&self, org_guid: &str) -> ApiResult<()> {
        let url = format!("{}?recursive=true", self.org_url(org_guid));
        self.gateway.delete_resource(&url, &self.session.access_token()).await
    }

    async fn find_quota_by_name(&self, name: &str) -> ApiResult<Quota> {
        let url = format!(
            "{}/v2/quota_definitions?{}",
            self.session.target(),
            filter_query(&format!("name:{name}"))
        );

        let page: PaginatedResources<Resource<QuotaEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;

        page.resources
            .first()
            .map(|resource| resource.to_model())
            .ok_or_else(|| ApiResponse::not_found("Quota", name))
    }

    async fn update_quota(&self, org_guid: &str, quota_guid: &str) -> ApiResult<()> {
        let body = json_body(&json!({ "quota_definition_guid": quota_guid }))?;
        self.gateway
            .update_resource(&self.org_url(org_guid), &self.session.access_token(), Some(body))
            .await
    }
}
