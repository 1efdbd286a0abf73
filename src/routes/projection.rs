use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::BloodGroup;
use crate::routes::envelope::Envelope;

// =========================================================
// Multi-week projection types
// =========================================================

/// One future date's supply and demand forecast for the selected group.
/// Both values are floored at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecastRow {
    pub date: NaiveDate,
    pub predicted_supply: f64,
    pub predicted_demand: f64,
}

/// Complete projection dataset for one blood group, ordered by ascending
/// date and restricted to current-or-future dates. May be empty when the
/// whole generated horizon lies in the past; the frontend must tolerate an
/// empty series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionData {
    pub blood_group: BloodGroup,
    pub horizon_days: u32,
    pub rows: Vec<WeeklyForecastRow>,
    /// Surplus/deficit band over predicted supply vs predicted demand,
    /// indexed by the date axis of `rows`.
    pub envelope: Envelope,
}
