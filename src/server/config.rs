//! Configuration loading for vegd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.vegvisir/config.toml` (user)
//! 3. `/etc/vegvisir/config.toml` (system)
//! 4. Built-in defaults (reference seed dataset, loopback bind)
//!
//! An explicit `--config` path that does not exist is an error; absence of
//! the user/system files is not.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::FeatureStore;
use crate::types::{Feature, Point};
use crate::{Result, VegvisirError};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Feature dataset loaded into the store at startup.
    #[serde(default = "seed_features", rename = "feature")]
    pub features: Vec<FeatureEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            features: seed_features(),
        }
    }
}

/// Server network and pacing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:9470).
    #[serde(default = "default_address")]
    pub address: String,
    /// Artificial per-item delay for `ListFeatures` emission, in
    /// milliseconds. 0 emits eagerly; non-zero simulates a slow producer
    /// for demos (default: 0).
    #[serde(default)]
    pub pace_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            pace_ms: 0,
        }
    }
}

fn default_address() -> String {
    "127.0.0.1:9470".to_string()
}

/// One `[[feature]]` entry in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureEntry {
    pub name: String,
    pub latitude: i32,
    pub longitude: i32,
}

impl From<FeatureEntry> for Feature {
    fn from(entry: FeatureEntry) -> Self {
        Feature::new(entry.name, Point::new(entry.latitude, entry.longitude))
    }
}

/// The reference deployment's seed dataset, as config entries.
fn seed_features() -> Vec<FeatureEntry> {
    FeatureStore::seed()
        .iter()
        .map(|f| FeatureEntry {
            name: f.name.clone(),
            latitude: f.location.latitude,
            longitude: f.location.longitude,
        })
        .collect()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; must exist)
    /// 2. `~/.vegvisir/config.toml`
    /// 3. `/etc/vegvisir/config.toml`
    /// 4. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit_path)? else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(&path).map_err(|e| {
            VegvisirError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            VegvisirError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Resolve the config file path, `None` meaning "use defaults".
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(VegvisirError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".vegvisir").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/vegvisir/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Build the feature store from the configured dataset.
    pub fn store(&self) -> FeatureStore {
        FeatureStore::new(self.features.iter().cloned().map(Into::into).collect())
    }
}
