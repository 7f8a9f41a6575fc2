//! Request execution against the control plane and the UAA
//!
//! - [`request`]: inert, fully buffered request descriptions
//! - [`error_handler`]: per-server classification of error bodies
//! - [`gateway`]: single-attempt execution with one token-refresh retry
//! - [`pagination`]: streaming walk over `next_url` links

pub mod error_handler;
pub mod gateway;
pub mod pagination;
pub mod request;

pub use error_handler::{
    cloud_controller_error_handler, uaa_error_handler, ErrorHandler, INVALID_TOKEN_CODE,
};
pub use gateway::{Gateway, GatewayError};
pub use pagination::{resolve_page_url, PaginatedResources};
pub use request::{user_agent, Request, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};
