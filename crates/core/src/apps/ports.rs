//! Port interfaces for applications
//!
//! Every call returns an `ApiResult`; listings stream through a `Listing`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use cfkit_domain::{
    ApiResult, AppSummary, Application, ApplicationFields, ApplicationInstance, Event, Stack,
};

use super::AppParams;
use crate::listing::Listing;

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Look up an app by name in the targeted space
    async fn find_by_name(&self, name: &str) -> ApiResult<Application>;

    async fn set_env(&self, app_guid: &str, env: &BTreeMap<String, String>) -> ApiResult<()>;

    /// Create an app in the targeted space
    async fn create(&self, params: &AppParams) -> ApiResult<Application>;

    /// Delete an app and everything bound to it
    async fn delete(&self, app_guid: &str) -> ApiResult<()>;

    async fn rename(&self, app_guid: &str, new_name: &str) -> ApiResult<()>;

    /// Update disk, instances and memory; zero values are left untouched
    async fn scale(&self, app: &ApplicationFields) -> ApiResult<()>;

    async fn start(&self, app_guid: &str) -> ApiResult<Application>;

    async fn start_with_different_buildpack(
        &self,
        app_guid: &str,
        buildpack: &str,
    ) -> ApiResult<Application>;

    async fn stop(&self, app_guid: &str) -> ApiResult<Application>;

    /// Instance states merged with their resource usage
    async fn get_instances(&self, app_guid: &str) -> ApiResult<Vec<ApplicationInstance>>;
}

#[async_trait]
pub trait AppSummaryRepository: Send + Sync {
    /// Every app in the targeted space, without per-instance details
    async fn summaries_in_current_space(&self) -> ApiResult<Vec<AppSummary>>;

    /// One app with its instances and routes
    async fn get_summary(&self, app_guid: &str) -> ApiResult<AppSummary>;
}

pub trait AppEventsRepository: Send + Sync {
    /// Crash events, oldest first
    fn list_events(&self, app_guid: &str) -> Listing<Event>;
}

#[async_trait]
pub trait AppFilesRepository: Send + Sync {
    /// Directory listing or file contents of instance 0
    async fn list_files(&self, app_guid: &str, path: &str) -> ApiResult<String>;
}

#[async_trait]
pub trait StackRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> ApiResult<Stack>;

    async fn find_all(&self) -> ApiResult<Vec<Stack>>;
}
