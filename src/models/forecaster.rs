//! Forecasting model abstraction and the artifact-backed implementation.
//!
//! The external training pipeline fits one time-series model per blood group
//! and per series (supply, demand, availability). From the backend's point of
//! view a model has exactly one capability: produce point estimates for a
//! sequence of dates. That capability is the [`Forecaster`] trait; tests
//! substitute deterministic fitted models for real trained ones.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::time::date_range;

/// Result type for forecast operations.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Errors produced by a forecasting model.
///
/// A missing model for a group is NOT an error (it degrades to a zero
/// prediction in the query layer); these variants cover failures of a model
/// that does exist.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The model produced a non-finite point estimate (NaN or infinite
    /// coefficients in the artifact).
    #[error("model produced a non-finite estimate for {date}")]
    NonFiniteEstimate { date: NaiveDate },
    /// The model returned fewer estimates than requested dates.
    #[error("model returned {got} estimates for {requested} dates")]
    IncompleteBatch { requested: usize, got: usize },
}

/// A fitted time-series model capable of producing point estimates.
pub trait Forecaster: Send + Sync {
    /// Point estimates (yhat) for each date, in input order.
    ///
    /// One call covers the whole batch; callers querying a horizon must not
    /// loop over single dates.
    fn predict(&self, dates: &[NaiveDate]) -> ForecastResult<Vec<f64>>;

    /// Last date covered by the model's training data.
    fn last_observed(&self) -> NaiveDate;

    /// Contiguous future dates of length `horizon_days`, starting the day
    /// after the last observation. Querying supply and demand over the same
    /// model-derived sequence keeps both series date-aligned.
    fn future_dates(&self, horizon_days: u32) -> Vec<NaiveDate> {
        date_range(self.last_observed() + Days::new(1), horizon_days)
    }
}

/// Artifact-backed forecaster: additive linear trend plus day-of-week
/// seasonal terms, deserialized from the JSON the training pipeline exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedForecaster {
    /// First training date; trend time is measured in days from here.
    pub origin: NaiveDate,
    /// Last date covered by the training data.
    pub last_observed: NaiveDate,
    /// Trend intercept at the origin.
    pub base: f64,
    /// Trend slope in units per day.
    pub slope_per_day: f64,
    /// Day-of-week seasonal terms, Monday first.
    pub weekly: [f64; 7],
}

impl FittedForecaster {
    /// Flat model that forecasts `value` for every date. Useful as a
    /// stand-in series (e.g. zero demand) and in tests.
    pub fn constant(value: f64, last_observed: NaiveDate) -> Self {
        Self {
            origin: last_observed,
            last_observed,
            base: value,
            slope_per_day: 0.0,
            weekly: [0.0; 7],
        }
    }

    fn point(&self, date: NaiveDate) -> f64 {
        let t = (date - self.origin).num_days() as f64;
        let seasonal = self.weekly[date.weekday().num_days_from_monday() as usize];
        self.base + self.slope_per_day * t + seasonal
    }
}

impl Forecaster for FittedForecaster {
    fn predict(&self, dates: &[NaiveDate]) -> ForecastResult<Vec<f64>> {
        dates
            .iter()
            .map(|&date| {
                let yhat = self.point(date);
                if yhat.is_finite() {
                    Ok(yhat)
                } else {
                    Err(ForecastError::NonFiniteEstimate { date })
                }
            })
            .collect()
    }

    fn last_observed(&self) -> NaiveDate {
        self.last_observed
    }
}
