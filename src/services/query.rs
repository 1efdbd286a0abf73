//! Single-group, single-date model query.

use chrono::NaiveDate;

use crate::api::BloodGroup;
use crate::models::{ForecastError, ForecastResult, Forecaster, ModelCollection};

/// Point prediction for one group on one date.
///
/// A group with no model in the collection resolves to 0 rather than an
/// error; the snapshot must degrade gracefully when the demand or
/// availability collection is missing a group the supply collection has.
/// A model that exists but fails to forecast propagates its error — that
/// failure is never silently converted to 0.
///
/// The raw estimate is rounded to the nearest integer and clamped at 0, so
/// the result is never negative.
pub fn predict_point(
    models: &ModelCollection,
    group: &BloodGroup,
    date: NaiveDate,
) -> ForecastResult<i64> {
    let Some(model) = models.get(group) else {
        return Ok(0);
    };

    let estimates = model.predict(std::slice::from_ref(&date))?;
    let yhat = estimates
        .first()
        .copied()
        .ok_or(ForecastError::IncompleteBatch {
            requested: 1,
            got: 0,
        })?;

    Ok((yhat.round() as i64).max(0))
}
