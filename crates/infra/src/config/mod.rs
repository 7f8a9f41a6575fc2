//! Configuration loading and persistence
//!
//! The configuration lives in `$CF_HOME/.cf/config.json` (falling back to the
//! user's home directory). JSON and TOML files are both understood.

pub mod loader;
pub mod store;

// Re-export commonly used items
pub use loader::{default_config_path, load, load_from_file, apply_env_overrides};
pub use store::JsonConfigStore;
