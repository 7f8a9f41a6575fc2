use async_trait::async_trait;
use cfkit_core::{AppFilesRepository, Session};
use cfkit_domain::ApiResult;
use reqwest::Method;
use tracing::instrument;

use crate::net::Gateway;

#[derive(Debug, Clone)]
pub struct CloudControllerAppFilesRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerAppFilesRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }
}

#[async_trait]
impl AppFilesRepository for CloudControllerAppFilesRepository {
    #[instrument(skip(self))]
    async fn list_files(&self, app_guid: &str, path: &str) -> ApiResult<String> {
        let url = format!(
            "{}/v2/apps/{app_guid}/instances/0/files/{}",
            self.session.target(),
            path.trim_start_matches('/')
        );

        let mut request =
            self.gateway.new_request(Method::GET, &url, &self.session.access_token(), None)?;
        let (files, _) = self.gateway.perform_for_text(&mut request).await?;
        Ok(files)
    }
}
