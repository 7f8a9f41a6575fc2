use async_trait::async_trait;
use cfkit_core::{Session, StackRepository};
use cfkit_domain::{ApiResponse, ApiResult, Stack};

use super::filter_query;
use super::resources::{Resource, StackEntity};
use crate::net::{Gateway, PaginatedResources};

#[derive(Debug, Clone)]
pub struct CloudControllerStackRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerStackRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    async fn fetch(&self, url: &str) -> ApiResult<Vec<Stack>> {
        let page: PaginatedResources<Resource<StackEntity>> =
            self.gateway.get_resource(url, &self.session.access_token()).await?;
        Ok(page.resources.iter().map(|resource| resource.to_model()).collect())
    }
}

#[async_trait]
impl StackRepository for CloudControllerStackRepository {
    async fn find_by_name(&self, name: &str) -> ApiResult<Stack> {
        let url = format!(
            "{}/v2/stacks?{}",
            self.session.target(),
            filter_query(&format!("name:{name}"))
        );

        self.fetch(&url)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ApiResponse::with_message(format!("Stack {name} not found")))
    }

    async fn find_all(&self) -> ApiResult<Vec<Stack>> {
        self.fetch(&format!("{}/v2/stacks", self.session.target())).await
    }
}
