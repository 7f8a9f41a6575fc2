use async_trait::async_trait;
use cfkit_core::{Listing, Session, SpaceRepository};
use cfkit_domain::{ApiResponse, ApiResult, Space, SpaceFields};
use serde_json::json;
use tracing::instrument;

use super::resources::{Resource, SpaceEntity};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

/// Spaces of the targeted organization
#[derive(Debug, Clone)]
pub struct CloudControllerSpaceRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerSpaceRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    fn space_url(&self, space_guid: &str) -> String {
        format!("{}/v2/spaces/{space_guid}", self.session.target())
    }
}

#[async_trait]
impl SpaceRepository for CloudControllerSpaceRepository {
    fn list_spaces(&self) -> Listing<Space> {
        let org = self.session.organization();
        self.gateway.list_resources(
            &self.session,
            &format!("/v2/organizations/{}/spaces", org.guid),
            |resource: Resource<SpaceEntity>| resource.to_model(),
        )
    }

    async fn find_by_name(&self, name: &str) -> ApiResult<Space> {
        let org = self.session.organization();
        self.find_by_name_in_org(name, &org.guid).await
    }

    #[instrument(skip(self))]
    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> ApiResult<Space> {
        let url = format!(
            "{}/v2/organizations/{org_guid}/spaces?{}&inline-relations-depth=1",
            self.session.target(),
            filter_query(&format!("name:{}", name.to_lowercase()))
        );

        let page: PaginatedResources<Resource<SpaceEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;

        page.resources
            .first()
            .map(|resource| resource.to_model())
            .ok_or_else(|| ApiResponse::not_found("Space", name))
    }

    async fn create(&self, name: &str) -> ApiResult<SpaceFields> {
        let org = self.session.organization();
        let body = json_body(&json!({ "name": name, "organization_guid": org.guid }))?;

        let resource: Resource<SpaceEntity> = self
            .gateway
            .create_resource_for_response(
                &format!("{}/v2/spaces", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await?;
        Ok(resource.to_fields())
    }

    async fn rename(&self, space_guid: &str, new_name: &str) -> ApiResult<()> {
        let body = json_body(&json!({ "name": new_name }))?;
        self.gateway
            .update_resource(&self.space_url(space_guid), &self.session.access_token(), Some(body))
            .await
    }

    async fn delete(&self, space_guid: &str) -> ApiResult<()> {
        let url = format!("{}?recursive=true", self.space_url(space_guid));
        self.gateway.delete_resource(&url, &self.session.access_token()).await
    }
}
