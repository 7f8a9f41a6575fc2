//! # cfkit Domain
//!
//! Domain types for the control-plane client.
//!
//! This crate contains:
//! - Resource models (applications, orgs, spaces, routes, services, ...)
//! - `CfError` and the `ApiResponse` status type every repository returns
//! - The persisted `Configuration` (target, tokens, targeted org/space)
//! - Shared constants (client version, server error codes)
//!
//! ## Architecture
//! - No dependencies on other cfkit crates
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod status;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use status::*;
pub use types::*;
