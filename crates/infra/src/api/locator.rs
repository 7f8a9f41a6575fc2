//! Repository wiring
//!
//! Builds one cloud-controller gateway and one UAA gateway over a shared
//! HTTP client, installs the UAA repository as the cloud-controller
//! gateway's token refresher, and hands out every repository bound to the
//! same [`Session`].

use std::sync::Arc;

use cfkit_core::{
    AppEventsRepository, AppFilesRepository, AppSummaryRepository, ApplicationRepository,
    AuthenticationRepository, ConfigRepository, DomainRepository, EndpointRepository,
    OrganizationRepository, PasswordRepository, RouteRepository, ServiceRepository, Session,
    SpaceRepository, StackRepository, TokenRefresher,
};

use super::{
    CloudControllerAppEventsRepository, CloudControllerAppFilesRepository,
    CloudControllerAppSummaryRepository, CloudControllerApplicationRepository,
    CloudControllerDomainRepository, CloudControllerOrganizationRepository,
    CloudControllerPasswordRepository, CloudControllerRouteRepository,
    CloudControllerServiceRepository, CloudControllerSpaceRepository,
    CloudControllerStackRepository, RemoteEndpointRepository, UaaAuthenticationRepository,
};
use crate::http::HttpClient;
use crate::net::Gateway;

pub struct RepositoryLocator {
    session: Session,
    config_repo: Arc<dyn ConfigRepository>,
    cloud_controller: Gateway,
    uaa: Gateway,
    authentication: Arc<UaaAuthenticationRepository>,
    applications: Arc<CloudControllerApplicationRepository>,
    domains: Arc<CloudControllerDomainRepository>,
}

impl RepositoryLocator {
    pub fn new(session: Session, client: HttpClient, config_repo: Arc<dyn ConfigRepository>) -> Self {
        let uaa = Gateway::uaa(client.clone());
        let authentication = Arc::new(UaaAuthenticationRepository::new(
            session.clone(),
            uaa.clone(),
            Arc::clone(&config_repo),
        ));

        let cloud_controller = Gateway::cloud_controller(client)
            .with_token_refresher(Arc::clone(&authentication) as Arc<dyn TokenRefresher>);

        let applications = Arc::new(CloudControllerApplicationRepository::new(
            session.clone(),
            cloud_controller.clone(),
        ));
        let domains =
            Arc::new(CloudControllerDomainRepository::new(session.clone(), cloud_controller.clone()));

        Self { session, config_repo, cloud_controller, uaa, authentication, applications, domains }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config_repository(&self) -> Arc<dyn ConfigRepository> {
        Arc::clone(&self.config_repo)
    }

    pub fn cloud_controller_gateway(&self) -> &Gateway {
        &self.cloud_controller
    }

    pub fn uaa_gateway(&self) -> &Gateway {
        &self.uaa
    }

    pub fn authentication_repository(&self) -> Arc<dyn AuthenticationRepository> {
        Arc::clone(&self.authentication) as Arc<dyn AuthenticationRepository>
    }

    pub fn endpoint_repository(&self) -> Arc<dyn EndpointRepository> {
        Arc::new(RemoteEndpointRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
            Arc::clone(&self.config_repo),
        ))
    }

    pub fn password_repository(&self) -> Arc<dyn PasswordRepository> {
        Arc::new(CloudControllerPasswordRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
            self.uaa.clone(),
        ))
    }

    pub fn application_repository(&self) -> Arc<dyn ApplicationRepository> {
        Arc::clone(&self.applications) as Arc<dyn ApplicationRepository>
    }

    pub fn app_summary_repository(&self) -> Arc<dyn AppSummaryRepository> {
        Arc::new(CloudControllerAppSummaryRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
            self.application_repository(),
        ))
    }

    pub fn app_events_repository(&self) -> Arc<dyn AppEventsRepository> {
        Arc::new(CloudControllerAppEventsRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }

    pub fn app_files_repository(&self) -> Arc<dyn AppFilesRepository> {
        Arc::new(CloudControllerAppFilesRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }

    pub fn stack_repository(&self) -> Arc<dyn StackRepository> {
        Arc::new(CloudControllerStackRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }

    pub fn domain_repository(&self) -> Arc<dyn DomainRepository> {
        Arc::clone(&self.domains) as Arc<dyn DomainRepository>
    }

    pub fn route_repository(&self) -> Arc<dyn RouteRepository> {
        Arc::new(CloudControllerRouteRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
            self.domain_repository(),
        ))
    }

    pub fn organization_repository(&self) -> Arc<dyn OrganizationRepository> {
        Arc::new(CloudControllerOrganizationRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        Arc::new(CloudControllerSpaceRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }

    pub fn service_repository(&self) -> Arc<dyn ServiceRepository> {
        Arc::new(CloudControllerServiceRepository::new(
            self.session.clone(),
            self.cloud_controller.clone(),
        ))
    }
}
