//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::envelope::Envelope;
pub use crate::routes::projection::ProjectionData;
pub use crate::routes::projection::WeeklyForecastRow;
pub use crate::routes::snapshot::DailySnapshotData;
pub use crate::routes::snapshot::DailySnapshotRow;

use serde::{Deserialize, Serialize};

/// Blood group identifier (e.g. "A+", "O-").
///
/// Used as the join key across the supply, demand and availability model
/// collections. The set of selectable groups is the sorted key set of the
/// supply collection.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BloodGroup(pub String);

impl BloodGroup {
    pub fn new(value: impl Into<String>) -> Self {
        BloodGroup(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BloodGroup {
    fn from(value: &str) -> Self {
        BloodGroup(value.to_string())
    }
}
