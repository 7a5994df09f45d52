//! Application configuration management.
//!
//! Configuration is stored at `~/.config/devport/config.json` and currently
//! only remembers the last username used to log in. The auth gateway base
//! URL is resolved separately from the environment so deployments can point
//! the client at a different gateway without touching the config file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "devport";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the auth gateway base URL.
/// An empty value is meaningful: it selects relative-path mode, for
/// deployments where the gateway sits behind the same proxy as the client.
const API_URL_ENV: &str = "PORTAL_API_URL";

/// Gateway base URL used when the environment does not say otherwise
const DEFAULT_API_BASE: &str = "http://localhost:5001";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding the persisted session entries
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

/// Resolve the auth gateway base URL. The environment wins whenever the
/// variable is set, even when set to the empty string.
pub fn api_base_url() -> String {
    resolve_base_url(std::env::var(API_URL_ENV).ok())
}

fn resolve_base_url(env_value: Option<String>) -> String {
    match env_value {
        Some(value) => value.trim_end_matches('/').to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_defaults_to_local_gateway() {
        assert_eq!(resolve_base_url(None), "http://localhost:5001");
    }

    #[test]
    fn base_url_env_override_wins() {
        assert_eq!(
            resolve_base_url(Some("https://portal.example.com".to_string())),
            "https://portal.example.com"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        assert_eq!(
            resolve_base_url(Some("https://portal.example.com/".to_string())),
            "https://portal.example.com"
        );
    }

    #[test]
    fn base_url_empty_string_means_relative_paths() {
        assert_eq!(resolve_base_url(Some(String::new())), "");
    }
}
