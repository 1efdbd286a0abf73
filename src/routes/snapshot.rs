use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::BloodGroup;
use crate::routes::envelope::Envelope;

// =========================================================
// Daily inventory snapshot types
// =========================================================

/// One blood group's inventory forecast for a single target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySnapshotRow {
    pub blood_group: BloodGroup,
    /// Units forecast to already be on the shelf (availability model).
    pub starting_inventory: i64,
    /// Starting inventory plus freshly supplied units (supply model).
    pub total_available_supply: i64,
    /// Units forecast to be requested (demand model).
    pub predicted_demand: i64,
}

/// Complete daily snapshot dataset, one row per supply-collection group in
/// ascending group order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySnapshotData {
    pub target_date: NaiveDate,
    pub rows: Vec<DailySnapshotRow>,
    /// Surplus/deficit band over total available supply vs predicted demand,
    /// indexed by the group axis of `rows`.
    pub envelope: Envelope,
}
