//! # cfkit Core
//!
//! Client-side business rules - no HTTP or filesystem code.
//!
//! This crate contains:
//! - Port interfaces (traits) for every control-plane repository
//! - The shared `Session` holding target and tokens
//! - `Listing`, the streamed result of a paginated call
//! - Command preconditions and client-side validation
//!
//! ## Architecture Principles
//! - Only depends on `cfkit-domain`
//! - All I/O behind traits implemented in `cfkit-infra`

pub mod apps;
pub mod auth;
pub mod listing;
pub mod orgs;
pub mod requirements;
pub mod routing;
pub mod services;
pub mod session;

// Infrastructure ports
pub mod config_ports;

pub use apps::ports::{
    AppEventsRepository, AppFilesRepository, AppSummaryRepository, ApplicationRepository,
    StackRepository,
};
pub use apps::{validate_application_name, AppParams};
pub use auth::ports::{
    AuthenticationRepository, EndpointRepository, PasswordRepository, TokenRefresher,
};
pub use auth::PasswordScore;
pub use config_ports::ConfigRepository;
pub use listing::{Listing, ListingProducer};
pub use orgs::ports::{OrganizationRepository, SpaceRepository};
pub use requirements::{Requirement, RequirementError};
pub use routing::ports::{DomainRepository, RouteRepository};
pub use services::ports::ServiceRepository;
pub use session::Session;
