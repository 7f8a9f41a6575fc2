//! Control-plane and UAA repositories
//!
//! Each repository reads target and token from the shared [`Session`] at call
//! time, builds its request through the [`Gateway`] and decodes the response
//! with the [`resources`] decoders. Every outcome is an `ApiResult`.
//!
//! [`Session`]: cfkit_core::Session
//! [`Gateway`]: crate::net::Gateway

pub mod app_events;
pub mod app_files;
pub mod app_summary;
pub mod applications;
pub mod authentication;
pub mod domains;
pub mod endpoints;
pub mod locator;
pub mod organizations;
pub mod password;
pub mod resources;
pub mod routes;
pub mod services;
pub mod spaces;
pub mod stacks;

use cfkit_domain::{ApiResponse, ApiResult, CfError};
use serde::Serialize;
use url::form_urlencoded;

use crate::errors::InfraError;

pub use app_events::CloudControllerAppEventsRepository;
pub use app_files::CloudControllerAppFilesRepository;
pub use app_summary::CloudControllerAppSummaryRepository;
pub use applications::CloudControllerApplicationRepository;
pub use authentication::UaaAuthenticationRepository;
pub use domains::CloudControllerDomainRepository;
pub use endpoints::RemoteEndpointRepository;
pub use locator::RepositoryLocator;
pub use organizations::CloudControllerOrganizationRepository;
pub use password::CloudControllerPasswordRepository;
pub use routes::CloudControllerRouteRepository;
pub use services::CloudControllerServiceRepository;
pub use spaces::CloudControllerSpaceRepository;
pub use stacks::CloudControllerStackRepository;

/// Serialize a request body, reporting failures as a local-failure status.
pub(crate) fn json_body<T: Serialize>(value: &T) -> ApiResult<Vec<u8>> {
    serde_json::to_vec(value)
        .map_err(|err| ApiResponse::with_error("Error creating json", CfError::from(InfraError::from(err))))
}

/// `q=<filter>` query parameter, percent-encoded (`name:foo` → `name%3Afoo`).
pub(crate) fn filter_query(filter: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(filter.as_bytes()).collect();
    format!("q={encoded}")
}
