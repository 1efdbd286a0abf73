//! Service layer: the forecast-aggregation logic.
//!
//! These functions combine per-group point predictions into the datasets the
//! frontend renders. They are pure: all state comes in as arguments (the
//! read-only model collections plus the user's date/group selection) and
//! every dataset is recomputed per request.

pub mod envelope;

pub mod projection;

pub mod query;

pub mod snapshot;

pub use envelope::derive_envelope;
pub use projection::{
    build_weekly_projection, project_group, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};
pub use query::predict_point;
pub use snapshot::{build_daily_snapshot, snapshot_data};

use thiserror::Error;

use crate::api::BloodGroup;
use crate::models::ForecastError;

/// Errors from the aggregation service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A model that exists failed to produce a forecast.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
    /// The selected group is not in the supply collection's key set.
    #[error("unknown blood group: {0}")]
    UnknownGroup(BloodGroup),
    /// Envelope derivation was handed series of different lengths.
    #[error("series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
