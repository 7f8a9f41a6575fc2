//! File-backed configuration store

use std::path::{Path, PathBuf};

use cfkit_core::ConfigRepository;
use cfkit_domain::{CfError, Configuration, Result};

use super::loader;
use crate::errors::InfraError;

/// Persists the configuration to a single file.
///
/// Saves write a sibling temp file and rename it over the target, so a
/// crash never leaves a half-written config behind.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$CF_HOME/.cf/config.json`.
    pub fn at_default_location() -> Result<Self> {
        loader::default_config_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn serialize(&self, config: &Configuration) -> Result<String> {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::to_string_pretty(config)
                .map_err(|e| CfError::Config(format!("Failed to encode config: {e}"))),
            _ => serde_json::to_string_pretty(config)
                .map_err(|e| CfError::Config(format!("Failed to encode config: {e}"))),
        }
    }
}

impl ConfigRepository for JsonConfigStore {
    fn load(&self) -> Result<Configuration> {
        loader::load_from_file(&self.path)
    }

    fn save(&self, config: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CfError::from(InfraError::from(e)))?;
        }

        let contents = self.serialize(config)?;
        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        std::fs::write(&temp_path, contents).map_err(|e| CfError::from(InfraError::from(e)))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| CfError::from(InfraError::from(e)))?;

        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cfkit_domain::{OrganizationFields, SpaceFields};
    use tempfile::TempDir;

    use super::*;

    fn targeted() -> Configuration {
        Configuration {
            target: "https://api.example.com".into(),
            access_token: "bearer abc".into(),
            refresh_token: "refresh".into(),
            organization_fields: OrganizationFields::new("org-guid", "my-org"),
            space_fields: SpaceFields::new("space-guid", "dev"),
            ..Default::default()
        }
    }

    #[test]
    fn save_then_load_in_nested_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path().join(".cf").join("config.json"));

        store.save(&targeted()).unwrap();

        assert_eq!(store.load().unwrap(), targeted());
        assert!(!dir.path().join(".cf").join("config.json.tmp").exists());
    }

    #[test]
    fn clear_session_keeps_target() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.json"));
        store.save(&targeted()).unwrap();

        store.clear_session().unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.target, "https://api.example.com");
        assert!(!config.is_logged_in());
        assert!(!config.has_organization());
    }

    #[test]
    fn toml_store_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonConfigStore::new(dir.path().join("config.toml"));

        store.save(&targeted()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("target = \"https://api.example.com\""));
        assert_eq!(store.load().unwrap().space_fields.name, "dev");
    }
}
