use std::sync::Arc;

use async_trait::async_trait;
use cfkit_core::{AppSummaryRepository, ApplicationRepository, Session};
use cfkit_domain::{ApiResult, AppSummary};
use tracing::instrument;

use super::resources::{AppFromSummary, SpaceSummary};
use crate::net::Gateway;

/// Summary views built from `/summary` endpoints
#[derive(Clone)]
pub struct CloudControllerAppSummaryRepository {
    session: Session,
    gateway: Gateway,
    app_repo: Arc<dyn ApplicationRepository>,
}

impl CloudControllerAppSummaryRepository {
    pub fn new(session: Session, gateway: Gateway, app_repo: Arc<dyn ApplicationRepository>) -> Self {
        Self { session, gateway, app_repo }
    }
}

#[async_trait]
impl AppSummaryRepository for CloudControllerAppSummaryRepository {
    #[instrument(skip(self))]
    async fn summaries_in_current_space(&self) -> ApiResult<Vec<AppSummary>> {
        let snapshot = self.session.snapshot();
        let url = format!("{}/v2/spaces/{}/summary", snapshot.target, snapshot.space_fields.guid);

        let summary: SpaceSummary = self.gateway.get_resource(&url, &snapshot.access_token).await?;
        Ok(summary.apps.iter().map(AppFromSummary::to_model).collect())
    }

    #[instrument(skip(self))]
    async fn get_summary(&self, app_guid: &str) -> ApiResult<AppSummary> {
        let url = format!("{}/v2/apps/{app_guid}/summary", self.session.target());
        let app: AppFromSummary =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;

        let mut summary = app.to_model();
        summary.instances = self.app_repo.get_instances(&summary.app.guid).await?;
        Ok(summary)
    }
}
