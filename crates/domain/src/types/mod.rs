//! Control-plane resource models
//!
//! Each resource is split into a `*Fields` struct of scalar attributes and an
//! aggregate carrying the associated collections. Collections are only
//! populated as deep as the request asked the server to inline them and are
//! empty otherwise.

/// Declares a `{ guid, name }` fields struct.
macro_rules! named_fields {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            pub guid: String,
            pub name: String,
        }

        impl $name {
            pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
                Self { guid: guid.into(), name: name.into() }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

mod app;
mod org;
mod route;
mod service;

pub use app::*;
pub use org::*;
pub use route::*;
pub use service::*;
