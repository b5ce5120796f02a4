//! Persisted application settings (TOML in the `.sentidash` app dir).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{self, ModelType};
use crate::{app_dirs, scrape};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "SENTIDASH_API_BASE";

/// Application settings persisted between launches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Backend base URL; overridable per-launch via `SENTIDASH_API_BASE`.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model variant preselected in the dashboard.
    #[serde(default)]
    pub model_type: ModelType,
    /// When true, the scrape tab uses the client-only reader-proxy path;
    /// otherwise it delegates to the backend scrape endpoint.
    #[serde(default = "default_true")]
    pub client_scrape_only: bool,
    /// Row limit preloaded into the scrape tab.
    #[serde(default = "default_scrape_limit")]
    pub scrape_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model_type: ModelType::default(),
            client_scrape_only: true,
            scrape_limit: scrape::DEFAULT_LIMIT,
        }
    }
}

fn default_api_base() -> String {
    api::DEFAULT_API_BASE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_scrape_limit() -> u32 {
    scrape::DEFAULT_LIMIT
}

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file did not parse as TOML.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load persisted settings, falling back to defaults when no file exists.
///
/// The `SENTIDASH_API_BASE` environment variable, when set and non-empty,
/// overrides the persisted base URL for this launch without rewriting it.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let mut config = load_from(&config_path()?)?;
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        let trimmed = base.trim();
        if !trimmed.is_empty() {
            config.api_base = trimmed.trim_end_matches('/').to_string();
        }
    }
    Ok(config)
}

/// Persist settings to the app directory.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&config_path()?, config)
}

fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let raw = toml::to_string_pretty(config)?;
    std::fs::write(path, raw).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_dashboard_presets() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.model_type, ModelType::Visobert);
        assert!(config.client_scrape_only);
        assert_eq!(config.scrape_limit, 30);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = AppConfig {
            api_base: "http://10.0.0.5:8000".into(),
            model_type: ModelType::Multilingual,
            client_scrape_only: false,
            scrape_limit: 120,
        };
        save_to(&path, &config).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "model_type = \"distilbert\"\n").unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.model_type, ModelType::Distilbert);
        assert_eq!(loaded.api_base, "http://127.0.0.1:8000");
        assert_eq!(loaded.scrape_limit, 30);
    }
}
