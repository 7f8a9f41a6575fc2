use std::collections::BTreeMap;

use async_trait::async_trait;
use cfkit_core::{ServiceRepository, Session};
use cfkit_domain::constants::SERVICE_INSTANCE_NAME_TAKEN;
use cfkit_domain::{
    ApiResponse, ApiResult, ServiceInstance, ServiceInstanceFields, ServiceOffering,
};
use serde_json::json;
use tracing::{debug, instrument};

use super::resources::{Resource, ServiceInstanceEntity, ServiceOfferingEntity};
use super::{filter_query, json_body};
use crate::net::{Gateway, PaginatedResources};

#[derive(Debug, Clone)]
pub struct CloudControllerServiceRepository {
    session: Session,
    gateway: Gateway,
}

impl CloudControllerServiceRepository {
    pub fn new(session: Session, gateway: Gateway) -> Self {
        Self { session, gateway }
    }

    fn instance_url(&self, instance_guid: &str) -> String {
        format!("{}/v2/service_instances/{instance_guid}", self.session.target())
    }
}

#[async_trait]
impl ServiceRepository for CloudControllerServiceRepository {
    async fn get_service_offerings(&self) -> ApiResult<Vec<ServiceOffering>> {
        let url = format!("{}/v2/services?inline-relations-depth=1", self.session.target());
        let page: PaginatedResources<Resource<ServiceOfferingEntity>> =
            self.gateway.get_resource(&url, &self.session.access_token()).await?;
        Ok(page.resources.iter().map(|resource| resource.to_model()).collect())
    }

    /// `Ok(true)` when an instance with the same name and plan already
    /// existed.
    #[instrument(skip(self))]
    async fn create_service_instance(&self, name: &str, plan_guid: &str) -> ApiResult<bool> {
        let space = self.session.space();
        let body = json_body(&json!({
            "name": name,
            "service_plan_guid": plan_guid,
            "space_guid": space.guid,
        }))?;

        let created = self
            .gateway
            .create_resource(
                &format!("{}/v2/service_instances", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await;

        match created {
            Ok(()) => Ok(false),
            Err(status) if status.error_code() == SERVICE_INSTANCE_NAME_TAKEN => {
                match self.find_instance_by_name(name).await {
                    Ok(existing) if existing.service_plan.guid == plan_guid => {
                        debug!("identical service instance already exists");
                        Ok(true)
                    }
                    _ => Err(status),
                }
            }
            Err(status) => Err(status),
        }
    }

    async fn create_user_provided_service_instance(
        &self,
        name: &str,
        credentials: &BTreeMap<String, String>,
    ) -> ApiResult<()> {
        let space = self.session.space();
        let body = json_body(&json!({
            "name": name,
            "credentials": credentials,
            "space_guid": space.guid,
        }))?;

        self.gateway
            .create_resource(
                &format!("{}/v2/user_provided_service_instances", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await
    }

    async fn update_user_provided_service_instance(
        &self,
        instance: &ServiceInstanceFields,
    ) -> ApiResult<()> {
        let body = json_body(&json!({ "credentials": instance.params }))?;
        let url = format!(
            "{}/v2/user_provided_service_instances/{}",
            self.session.target(),
            instance.guid
        );
        self.gateway.update_resource(&url, &self.session.access_token(), Some(body)).await
    }

    #[instrument(skip(self))]
    async fn find_instance_by_name(&self, name: &str) -> ApiResult<ServiceInstance> {
        let snapshot = self.session.snapshot();
        let url = format!(
            "{}/v2/spaces/{}/service_instances?return_user_provided_service_instances=true&{}&inline-relations-depth=2",
            snapshot.target,
            snapshot.space_fields.guid,
            filter_query(&format!("name:{name}"))
        );

        let page: PaginatedResources<Resource<ServiceInstanceEntity>> =
            self.gateway.get_resource(&url, &snapshot.access_token).await?;

        page.resources
            .first()
            .map(|resource| resource.to_model())
            .ok_or_else(|| ApiResponse::not_found("Service instance", name))
    }

    async fn bind_service(&self, instance_guid: &str, app_guid: &str) -> ApiResult<()> {
        let body = json_body(&json!({
            "app_guid": app_guid,
            "service_instance_guid": instance_guid,
        }))?;

        self.gateway
            .create_resource(
                &format!("{}/v2/service_bindings", self.session.target()),
                &self.session.access_token(),
                body,
            )
            .await
    }

    /// `Ok(false)` when the app was not bound; nothing is sent then.
    async fn unbind_service(&self, instance: &ServiceInstance, app_guid: &str) -> ApiResult<bool> {
        let Some(binding) = instance.binding_for_app(app_guid) else {
            return Ok(false);
        };

        let url = format!("{}{}", self.session.target().trim_end_matches('/'), binding.url);
        self.gateway.delete_resource(&url, &self.session.access_token()).await?;
        Ok(true)
    }

    async fn delete_service(&self, instance: &ServiceInstance) -> ApiResult<()> {
        if !instance.service_bindings.is_empty() {
            return Err(ApiResponse::with_message(
                "Cannot delete service instance, apps are still bound to it",
            ));
        }

        self.gateway
            .delete_resource(&self.instance_url(&instance.fields.guid), &self.session.access_token())
            .await
    }

    async fn rename_service(&self, instance_guid: &str, new_name: &str) -> ApiResult<()> {
        let body = json_body(&json!({ "name": new_name }))?;
        self.gateway
            .update_resource(&self.instance_url(instance_guid), &self.session.access_token(), Some(body))
            .await
    }
}
