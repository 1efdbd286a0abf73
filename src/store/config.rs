//! Model store configuration file support.
//!
//! This module provides utilities for reading the artifact locations from a
//! TOML configuration file, with environment-variable overrides for
//! container deployments.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ModelStoreError, ModelStoreResult};

/// Store configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub models: ModelSettings,
}

/// Artifact location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Directory holding the model artifacts.
    #[serde(default = "default_model_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_supply_file")]
    pub supply: String,
    #[serde(default = "default_demand_file")]
    pub demand: String,
    #[serde(default = "default_availability_file")]
    pub availability: String,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_supply_file() -> String {
    "supply.json".to_string()
}

fn default_demand_file() -> String {
    "demand.json".to_string()
}

fn default_availability_file() -> String {
    "availability.json".to_string()
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            supply: default_supply_file(),
            demand: default_demand_file(),
            availability: default_availability_file(),
        }
    }
}

impl StoreConfig {
    /// Read configuration from a TOML file.
    pub fn from_file(path: &Path) -> ModelStoreResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ModelStoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw)
            .map_err(|e| ModelStoreError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Build configuration from environment variables, falling back to the
    /// defaults (`models/{supply,demand,availability}.json`).
    ///
    /// Recognized variables: `HEMOCAST_MODEL_DIR`, `HEMOCAST_SUPPLY_MODELS`,
    /// `HEMOCAST_DEMAND_MODELS`, `HEMOCAST_AVAILABILITY_MODELS`.
    pub fn from_env() -> Self {
        let mut settings = ModelSettings::default();
        if let Ok(dir) = env::var("HEMOCAST_MODEL_DIR") {
            settings.dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("HEMOCAST_SUPPLY_MODELS") {
            settings.supply = file;
        }
        if let Ok(file) = env::var("HEMOCAST_DEMAND_MODELS") {
            settings.demand = file;
        }
        if let Ok(file) = env::var("HEMOCAST_AVAILABILITY_MODELS") {
            settings.availability = file;
        }
        Self { models: settings }
    }

    pub fn supply_path(&self) -> PathBuf {
        self.models.dir.join(&self.models.supply)
    }

    pub fn demand_path(&self) -> PathBuf {
        self.models.dir.join(&self.models.demand)
    }

    pub fn availability_path(&self) -> PathBuf {
        self.models.dir.join(&self.models.availability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::default();
        assert_eq!(config.supply_path(), PathBuf::from("models/supply.json"));
        assert_eq!(config.demand_path(), PathBuf::from("models/demand.json"));
        assert_eq!(
            config.availability_path(),
            PathBuf::from("models/availability.json")
        );
    }

    #[test]
    fn test_parse_toml_with_partial_settings() {
        let raw = r#"
            [models]
            dir = "/srv/hemocast/artifacts"
            supply = "supply_v2.json"
        "#;
        let config: StoreConfig = toml::from_str(raw).unwrap();
        assert_eq!(
            config.supply_path(),
            PathBuf::from("/srv/hemocast/artifacts/supply_v2.json")
        );
        // Unset fields fall back to defaults.
        assert_eq!(
            config.demand_path(),
            PathBuf::from("/srv/hemocast/artifacts/demand.json")
        );
    }

    #[test]
    fn test_from_file_missing() {
        let result = StoreConfig::from_file(Path::new("/nonexistent/hemocast.toml"));
        assert!(matches!(result, Err(ModelStoreError::Io { .. })));
    }
}
