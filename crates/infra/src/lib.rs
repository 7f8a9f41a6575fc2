//! # cfkit Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP transport and the request/gateway/pagination stack
//! - Resource decoders for control-plane payloads
//! - Control-plane and UAA repositories plus the `RepositoryLocator`
//! - Configuration loading and the file-backed config store
//!
//! ## Architecture
//! - Implements traits defined in `cfkit-core`
//! - Depends on `cfkit-domain` and `cfkit-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod net;

// Re-export commonly used items
pub use api::RepositoryLocator;
pub use config::JsonConfigStore;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use net::{Gateway, GatewayError, PaginatedResources, Request};
