//! Model artifact store.
//!
//! The training pipeline exports one JSON artifact per series (supply,
//! demand, availability), each mapping blood group to a fitted forecaster.
//! This module loads the three artifacts once at startup, optionally
//! verifies their checksums, and exposes the resulting [`ModelSet`]
//! process-wide.
//!
//! A load failure is fatal for the whole dashboard: callers must not reach
//! the aggregation core without a complete model set. The set is immutable
//! after load, so it is shared freely across request handlers, and the pure
//! computation functions take it as an argument rather than reading ambient
//! global state — tests inject in-memory collections instead.

pub mod checksum;
pub mod config;
pub mod error;
pub mod loader;

pub use checksum::calculate_checksum;
pub use config::{ModelSettings, StoreConfig};
pub use error::{ModelStoreError, ModelStoreResult};
pub use loader::{load_collection, load_model_set};

use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};

use crate::models::ModelSet;

/// Global model set instance initialized once per process.
static MODELS: OnceLock<Arc<ModelSet>> = OnceLock::new();

/// Initialize the global model set singleton from the given configuration.
pub fn init_models(config: &StoreConfig) -> Result<()> {
    if MODELS.get().is_some() {
        return Ok(());
    }

    let set = load_model_set(config).context("failed to load forecast model artifacts")?;
    let _ = MODELS.set(Arc::new(set));
    Ok(())
}

/// Get a reference to the global model set instance.
pub fn get_models() -> Result<&'static Arc<ModelSet>> {
    MODELS
        .get()
        .context("Models not initialized. Call init_models() first.")
}
