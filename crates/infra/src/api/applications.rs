use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use cfkit_core::{validate_application_name, AppParams, ApplicationRepository, Session};
use cfkit_domain::{ApiResponse, ApiResult, Application, ApplicationFields, ApplicationInstance};
use serde_json::{json, Map, Value};
use tracing::{debug, instrument};

use super::resources::{merge_instances, ApplicationEntity, InstanceEntry, Resource, StatsEntry};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

/// Applications of the targeted space
#[derive(Debug, Clone)]
pub struct CloudControllerApplicationRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerApplicationRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    fn app_url(&self, app_guid: &str) -> String {
        format!("{}/v2/apps/{app_guid}", self.session.target())
    }

    async fn update_app(&self, app_guid: &str, body: &Value) -> ApiResult<()> {
        let body = json_body(body)?;
        self.gateway
            .update_resource(&self.app_url(app_guid), &self.session.access_token(), Some(body))
            .await
    }

    async fn start_or_stop(&self, app_guid: &str, mut updates: Map<String, Value>) -> ApiResult<Application> {
        updates.insert("console".into(), Value::Bool(true));
        let url = format!("{}?inline-relations-depth=2", self.app_url(app_guid));
        let body = json_body(&updates)?;

        let resource: Resource<ApplicationEntity> = self
            .gateway
            .update_resource_for_response(&url, &self.session.access_token(), body)
            .await?;
        Ok(resource.to_model())
    }
}

fn state_update(state: &str) -> Map<String, Value> {
    let mut updates = Map::new();
    updates.insert("state".into(), Value::from(state));
    updates
}

#[async_trait]
impl ApplicationRepository for CloudControllerApplicationRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> ApiResult<Application> {
        let snapshot = self.session.snapshot();
        let url = format!(
            "{}/v2/spaces/{}/apps?{}&inline-relations-depth=1",
            snapshot.target,
            snapshot.space_fields.guid,
            filter_query(&format!("name:{name}"))
        );

        let page: PaginatedResources<Resource<ApplicationEntity>> =
            self.gateway.get_resource(&url, &snapshot.access_token).await?;

        page.resources
            .first()
            .map(|resource| resource.to_model())
            .ok_or_else(|| ApiResponse::not_found("App", name))
    }

    async fn set_env(&self, app_guid: &str, env: &BTreeMap<String, String>) -> ApiResult<()> {
        self.update_app(app_guid, &json!({ "environment_json": env })).await
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    async fn create(&self, params: &AppParams) -> ApiResult<Application> {
        validate_application_name(&params.name)?;

        let snapshot = self.session.snapshot();
        let body = json_body(&json!({
            "space_guid": snapshot.space_fields.guid,
            "name": params.name,
            "instances": params.instances,
            "buildpack": params.buildpack_url,
            "memory": params.memory,
            "stack_guid": params.stack_guid,
            "command": params.command,
        }))?;

        let resource: Resource<ApplicationEntity> = self
            .gateway
            .create_resource_for_response(
                &format!("{}/v2/apps", snapshot.target),
                &snapshot.access_token,
                body,
            )
            .await?;
        Ok(resource.to_model())
    }

    async fn delete(&self, app_guid: &str) -> ApiResult<()> {
        let url = format!("{}?recursive=true", self.app_url(app_guid));
        self.gateway.delete_resource(&url, &self.session.access_token()).await
    }

    async fn rename(&self, app_guid: &str, new_name: &str) -> ApiResult<()> {
        validate_application_name(new_name)?;
        self.update_app(app_guid, &json!({ "name": new_name })).await
    }

    async fn scale(&self, app: &ApplicationFields) -> ApiResult<()> {
        let mut values = Map::new();
        if app.disk_quota > 0 {
            values.insert("disk_quota".into(), Value::from(app.disk_quota));
        }
        if app.instances > 0 {
            values.insert("instances".into(), Value::from(app.instances));
        }
        if app.memory > 0 {
            values.insert("memory".into(), Value::from(app.memory));
        }

        self.update_app(&app.guid, &Value::Object(values)).await
    }

    async fn start(&self, app_guid: &str) -> ApiResult<Application> {
        self.start_or_stop(app_guid, state_update("STARTED")).await
    }

    async fn start_with_different_buildpack(
        &self,
        app_guid: &str,
        buildpack: &str,
    ) -> ApiResult<Application> {
        let mut updates = state_update("STARTED");
        updates.insert("buildpack".into(), Value::from(buildpack));
        self.start_or_stop(app_guid, updates).await
    }

    async fn stop(&self, app_guid: &str) -> ApiResult<Application> {
        self.start_or_stop(app_guid, state_update("STOPPED")).await
    }

    #[instrument(skip(self))]
    async fn get_instances(&self, app_guid: &str) -> ApiResult<Vec<ApplicationInstance>> {
        let token = self.session.access_token();

        let instances: HashMap<String, InstanceEntry> = self
            .gateway
            .get_resource(&format!("{}/instances", self.app_url(app_guid)), &token)
            .await?;

        let stats: HashMap<String, StatsEntry> = self
            .gateway
            .get_resource(&format!("{}/stats", self.app_url(app_guid)), &token)
            .await?;

        debug!(instances = instances.len(), stats = stats.len(), "merging instance stats");
        Ok(merge_instances(instances, &stats))
    }
}
