//! Loading fitted forecaster artifacts from disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use crate::api::BloodGroup;
use crate::models::{FittedForecaster, Forecaster, ModelCollection, ModelSet};

use super::checksum;
use super::config::StoreConfig;
use super::error::{ModelStoreError, ModelStoreResult};

/// Load one artifact: a JSON object mapping blood group to fitted
/// forecaster parameters. If a `<file>.sha256` sidecar exists next to the
/// artifact, the content is verified against it before parsing.
pub fn load_collection(path: &Path) -> ModelStoreResult<ModelCollection> {
    if !path.exists() {
        return Err(ModelStoreError::ArtifactMissing {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read(path).map_err(|source| ModelStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    verify_sidecar(path, &raw)?;

    let fitted: BTreeMap<String, FittedForecaster> =
        serde_json::from_slice(&raw).map_err(|source| ModelStoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut collection = ModelCollection::new();
    for (group, model) in fitted {
        collection.insert(BloodGroup::new(group), Arc::new(model) as Arc<dyn Forecaster>);
    }
    Ok(collection)
}

/// Load the three collections named by the configuration.
pub fn load_model_set(config: &StoreConfig) -> ModelStoreResult<ModelSet> {
    let supply = load_collection(&config.supply_path())?;
    let demand = load_collection(&config.demand_path())?;
    let availability = load_collection(&config.availability_path())?;

    info!(
        "loaded model set: {} supply, {} demand, {} availability models",
        supply.len(),
        demand.len(),
        availability.len()
    );

    Ok(ModelSet {
        supply,
        demand,
        availability,
    })
}

fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".sha256");
    PathBuf::from(name)
}

fn verify_sidecar(path: &Path, content: &[u8]) -> ModelStoreResult<()> {
    let sidecar = sidecar_path(path);
    if !sidecar.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&sidecar).map_err(|source| ModelStoreError::Io {
        path: sidecar.clone(),
        source,
    })?;
    // `sha256sum` format: digest, whitespace, file name.
    let expected = raw.split_whitespace().next().unwrap_or("");

    if !checksum::matches(content, expected) {
        return Err(ModelStoreError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            computed: checksum::calculate_checksum(content),
        });
    }
    info!("checksum verified for {}", path.display());
    Ok(())
}
