//! Per-group model collections.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::BloodGroup;
use crate::models::forecaster::Forecaster;

/// Mapping from blood group to an opaque fitted forecaster.
///
/// Loaded once at startup and read-only for the lifetime of the process; the
/// aggregation core never mutates it. Keys are kept ordered so group
/// iteration is deterministic (lexicographic).
#[derive(Default, Clone)]
pub struct ModelCollection {
    models: BTreeMap<BloodGroup, Arc<dyn Forecaster>>,
}

impl ModelCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: BloodGroup, model: Arc<dyn Forecaster>) {
        self.models.insert(group, model);
    }

    pub fn get(&self, group: &BloodGroup) -> Option<&Arc<dyn Forecaster>> {
        self.models.get(group)
    }

    pub fn contains(&self, group: &BloodGroup) -> bool {
        self.models.contains_key(group)
    }

    /// Key set in ascending lexicographic order.
    pub fn sorted_groups(&self) -> Vec<BloodGroup> {
        self.models.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<(BloodGroup, Arc<dyn Forecaster>)> for ModelCollection {
    fn from_iter<I: IntoIterator<Item = (BloodGroup, Arc<dyn Forecaster>)>>(iter: I) -> Self {
        Self {
            models: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for ModelCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCollection")
            .field("groups", &self.sorted_groups())
            .finish()
    }
}

/// The three model collections the dashboard aggregates over.
///
/// Produced by the store layer in one piece; handlers share it read-only via
/// `Arc`, so per-request computations may run in parallel.
#[derive(Debug, Default, Clone)]
pub struct ModelSet {
    pub supply: ModelCollection,
    pub demand: ModelCollection,
    pub availability: ModelCollection,
}
