use async_trait::async_trait;
use cfkit_core::{DomainRepository, Listing, Session};
use cfkit_domain::{ApiResponse, ApiResult, Domain, DomainFields};
use reqwest::Method;
use serde_json::json;

use super::resources::{DomainEntity, Resource};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

#[derive(Debug, Clone)]
pub struct CloudControllerDomainRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerDomainRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    /// First domain named `name` under `collection` (an org or space path).
    async fn find_by_name_in(&self, collection: &str, name: &str) -> ApiResult<DomainFields> {
        let url = format!(
            "{}{collection}/domains?{}&inline-relations-depth=1",
            self.session.target(),
            filter_query(&format!("name:{}", name.to_lowercase()))
        );

        let page: PaginatedResources<Resource<DomainEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;

        page.resources
            .first()
            .map(|resource| resource.to_fields())
            .ok_or_else(|| ApiResponse::not_found("Domain", name))
    }

    async fn change_mapping(&self, method: Method, domain_guid: &str, space_guid: &str) -> ApiResult<()> {
        let url = format!("{}/v2/spaces/{space_guid}/domains/{domain_guid}", self.session.target());
        let mut request =
            self.gateway.new_request(method, &url, &self.session.access_token(), None)?;
        self.gateway.perform(&mut request).await?;
        Ok(())
    }
}

#[async_trait]
impl DomainRepository for CloudControllerDomainRepository {
    fn list_domains_for_org(&self, org_guid: &str) -> Listing<Domain> {
        self.gateway.list_resources(
            &self.session,
            &format!("/v2/organizations/{org_guid}/domains?inline-relations-depth=1"),
            |resource: Resource<DomainEntity>| resource.to_model(),
        )
    }

    async fn find_by_name_in_current_space(&self, name: &str) -> ApiResult<DomainFields> {
        let space = self.session.space();
        self.find_by_name_in(&format!("/v2/spaces/{}", space.guid), name).await
    }

    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> ApiResult<DomainFields> {
        self.find_by_name_in(&format!("/v2/organizations/{org_guid}"), name).await
    }

    async fn create(&self, name: &str, owning_org_guid: &str) -> ApiResult<DomainFields> {
        let body = json_body(&json!({
            "name": name,
            "wildcard": true,
            "owning_organization_guid": owning_org_guid,
        }))?;

        let resource: Resource<DomainEntity> = self
            .gateway
            .create_resource_for_response(
                &format!("{}/v2/domains", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await?;
        Ok(resource.to_fields())
    }

    async fn map(&self, domain_guid: &str, space_guid: &str) -> ApiResult<()> {
        self.change_mapping(Method::PUT, domain_guid, space_guid).await
    }

    async fn unmap(&self, domain_guid: &str, space_guid: &str) -> ApiResult<()> {
        self.change_mapping(Method::DELETE, domain_guid, space_guid).await
    }

    async fn delete(&self, domain_guid: &str) -> ApiResult<()> {
        let url = format!("{}/v2/domains/{domain_guid}?recursive=true", self.session.target());
        self.gateway.delete_resource(&url, &self.session.access_token()).await
    }
}
