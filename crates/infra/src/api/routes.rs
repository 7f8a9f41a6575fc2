use std::sync::Arc;

use async_trait::async_trait;
use cfkit_core::{DomainRepository, Listing, RouteRepository, Session};
use cfkit_domain::{ApiResponse, ApiResult, DomainFields, Route, SpaceFields};
use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use super::resources::{Resource, RouteEntity};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

#[derive(Clone)]
pub struct CloudControllerRouteRepository {
    session: Session,
    gateway: Gateway,
    domain_repo: Arc<dyn DomainRepository>,
}

impl CloudControllerRouteRepository {
    pub fn new(session: Session, gateway: Gateway, domain_repo: Arc<dyn DomainRepository>) -> Self {
        Self { session, gateway, domain_repo }
    }

    async fn find_first(&self, filter: &str) -> ApiResult<Option<Route>> {
        let url = format!("{}/v2/routes?{}", self.session.target(), filter_query(filter));
        let page: PaginatedResources<Resource<RouteEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;
        Ok(page.resources.first().map(|resource| resource.to_model()))
    }

    /// PUT binds, DELETE unbinds.
    async fn change_binding(&self, method: Method, route_guid: &str, app_guid: &str) -> ApiResult<()> {
        let url = format!("{}/v2/apps/{app_guid}/routes/{route_guid}", self.session.target());
        let mut request =
            self.gateway.new_request(method, &url, &self.session.access_token(), None)?;
        self.gateway.perform(&mut request).await?;
        Ok(())
    }
}

#[async_trait]
impl RouteRepository for CloudControllerRouteRepository {
    fn list_routes(&self) -> Listing<Route> {
        self.gateway.list_resources(
            &self.session,
            "/v2/routes?inline-relations-depth=1",
            |resource: Resource<RouteEntity>| resource.to_model(),
        )
    }

    async fn find_by_host(&self, host: &str) -> ApiResult<Route> {
        self.find_first(&format!("host:{host}"))
            .await?
            .ok_or_else(|| ApiResponse::not_found("Route", host))
    }

    #[instrument(skip(self))]
    async fn find_by_host_and_domain(&self, host: &str, domain_name: &str) -> ApiResult<Route> {
        let domain = self.domain_repo.find_by_name_in_current_space(domain_name).await?;

        let mut route = self
            .find_first(&format!("host:{host};domain_guid:{}", domain.guid))
            .await?
            .ok_or_else(|| ApiResponse::not_found("Route", &format!("{host}.{domain_name}")))?;

        route.summary.domain = domain;
        Ok(route)
    }

    async fn create(&self, host: &str, domain: &DomainFields) -> ApiResult<Route> {
        let space = self.session.space();
        self.create_in_space(host, domain, &space).await
    }

    #[instrument(skip(self, domain, space), fields(domain = %domain.name, space = %space.name))]
    async fn create_in_space(
        &self,
        host: &str,
        domain: &DomainFields,
        space: &SpaceFields,
    ) -> ApiResult<Route> {
        let body = json_body(&json!({
            "host": host,
            "domain_guid": domain.guid,
            "space_guid": space.guid,
        }))?;

        let resource: Resource<RouteEntity> = self
            .gateway
            .create_resource_for_response(
                &format!("{}/v2/routes", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await?;

        let mut route = resource.to_model();
        route.summary.domain = domain.clone();
        route.space = space.clone();
        Ok(route)
    }

    async fn bind(&self, route_guid: &str, app_guid: &str) -> ApiResult<()> {
        self.change_binding(Method::PUT, route_guid, app_guid).await
    }

    async fn unbind(&self, route_guid: &str, app_guid: &str) -> ApiResult<()> {
        self.change_binding(Method::DELETE, route_guid, app_guid).await
    }

    async fn delete(&self, route_guid: &str) -> ApiResult<()> {
        let url = format!("{}/v2/routes/{route_guid}", self.session.target());
        self.gateway.delete_resource(&url, &self.session.access_token()).await
    }
}
