//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Resolve the config file: `$CF_HOME/.cf/config.json`, else
//!    `$HOME/.cf/config.json` (`%USERPROFILE%` on Windows)
//! 2. Parse it as JSON or TOML by extension; a missing file yields defaults
//! 3. Apply environment overrides
//!
//! ## Environment Variables
//! - `CF_HOME`: Directory containing `.cf/`
//! - `CF_TARGET`: Control-plane endpoint
//! - `CF_ACCESS_TOKEN`: Full `Authorization` header value
//! - `CF_SKIP_SSL_VALIDATION`: Accept invalid TLS certificates (true/false)
//! - `CF_REQUEST_TIMEOUT`: Request timeout in seconds

use std::path::{Path, PathBuf};

use cfkit_domain::{CfError, Configuration, Result};

const CONFIG_DIR: &str = ".cf";
const CONFIG_FILE: &str = "config.json";

/// Resolve the configuration file path from `CF_HOME` or the home directory.
///
/// # Errors
/// Returns `CfError::Config` when neither `CF_HOME` nor a home directory is
/// set.
pub fn default_config_path() -> Result<PathBuf> {
    let home = ["CF_HOME", "HOME", "USERPROFILE"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()))
        .ok_or_else(|| {
            CfError::Config("Could not determine home directory; set CF_HOME".to_string())
        })?;

    Ok(PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration at `path` and apply environment overrides.
///
/// # Errors
/// Returns `CfError::Config` if the file exists but cannot be read or parsed.
pub fn load(path: &Path) -> Result<Configuration> {
    let mut config = load_from_file(path)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load the configuration stored at `path`, without environment overrides.
///
/// A missing file is not an error: the client has simply never been
/// targeted, so defaults are returned.
pub fn load_from_file(path: &Path) -> Result<Configuration> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Configuration::default());
    }

    tracing::debug!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| CfError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Apply `CF_*` environment overrides on top of `config`.
///
/// # Errors
/// Returns `CfError::Config` if `CF_REQUEST_TIMEOUT` is not a number.
pub fn apply_env_overrides(config: &mut Configuration) -> Result<()> {
    if let Some(target) = env_var("CF_TARGET") {
        config.target = target.trim_end_matches('/').to_string();
    }
    if let Some(token) = env_var("CF_ACCESS_TOKEN") {
        config.access_token = token;
    }
    if let Some(timeout) = env_var("CF_REQUEST_TIMEOUT") {
        config.request_timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| CfError::Config(format!("Invalid request timeout: {}", e)))?;
    }
    config.skip_ssl_validation = env_bool("CF_SKIP_SSL_VALIDATION", config.skip_ssl_validation);
    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
pub(crate) fn parse_config(contents: &str, path: &Path) -> Result<Configuration> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| CfError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CfError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CfError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::TempDir;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["1", "true", "yes", "on", "TRUE"] {
            std::env::set_var("CFKIT_TEST_BOOL", value);
            assert!(env_bool("CFKIT_TEST_BOOL", false), "{value} should be true");
        }
        for value in ["0", "false", "no", "off"] {
            std::env::set_var("CFKIT_TEST_BOOL", value);
            assert!(!env_bool("CFKIT_TEST_BOOL", true), "{value} should be false");
        }

        std::env::remove_var("CFKIT_TEST_BOOL");
        assert!(env_bool("CFKIT_TEST_BOOL", true));
        assert!(!env_bool("CFKIT_TEST_BOOL", false));
    }

    #[test]
    fn test_default_path_prefers_cf_home() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        let saved = std::env::var("CF_HOME").ok();

        std::env::set_var("CF_HOME", "/tmp/cf-home");
        assert_eq!(
            default_config_path().unwrap(),
            PathBuf::from("/tmp/cf-home/.cf/config.json")
        );

        match saved {
            Some(value) => std::env::set_var("CF_HOME", value),
            None => std::env::remove_var("CF_HOME"),
        }
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("CF_TARGET", "https://api.override.com/");
        std::env::set_var("CF_ACCESS_TOKEN", "bearer from-env");
        std::env::set_var("CF_REQUEST_TIMEOUT", "5");

        let mut config = Configuration {
            target: "https://api.file.com".into(),
            access_token: "bearer from-file".into(),
            ..Default::default()
        };
        apply_env_overrides(&mut config).unwrap();

        assert_eq!(config.target, "https://api.override.com");
        assert_eq!(config.access_token, "bearer from-env");
        assert_eq!(config.request_timeout_secs, 5);

        std::env::set_var("CF_REQUEST_TIMEOUT", "soon");
        let err = apply_env_overrides(&mut config).unwrap_err();
        assert!(matches!(err, CfError::Config(_)));

        std::env::remove_var("CF_TARGET");
        std::env::remove_var("CF_ACCESS_TOKEN");
        std::env::remove_var("CF_REQUEST_TIMEOUT");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_parse_config_json() {
        let json_content = r#"{
            "target": "https://api.example.com",
            "access_token": "bearer abc",
            "organization_fields": {"guid": "org-guid", "name": "my-org"}
        }"#;

        let config = parse_config(json_content, Path::new("config.json")).unwrap();
        assert_eq!(config.target, "https://api.example.com");
        assert_eq!(config.organization_fields.name, "my-org");
        assert!(!config.has_space());
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
target = "https://api.example.com"
skip_ssl_validation = true

[space_fields]
guid = "space-guid"
name = "dev"
"#;

        let config = parse_config(toml_content, Path::new("config.toml")).unwrap();
        assert!(config.skip_ssl_validation);
        assert_eq!(config.space_fields.name, "dev");
    }

    #[test]
    fn test_parse_config_invalid_json() {
        let result = parse_config(r#"{ "target": "#, Path::new("config.json"));
        assert!(matches!(result, Err(CfError::Config(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("target: x", Path::new("config.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
