//! Multi-week supply-vs-demand projection builder.

use chrono::NaiveDate;

use crate::api::{BloodGroup, ProjectionData, WeeklyForecastRow};
use crate::models::{FittedForecaster, ForecastError, ForecastResult, Forecaster, ModelSet};
use crate::services::envelope::derive_envelope;
use crate::services::ServiceError;

/// Default projection horizon: four weeks.
pub const DEFAULT_HORIZON_DAYS: u32 = 28;

/// Largest horizon a caller may request. The date sequence is materialized
/// up front, so an unbounded horizon would let one request allocate
/// billions of dates; a year covers every chart the frontend draws.
pub const MAX_HORIZON_DAYS: u32 = 366;

/// Project one group's supply and demand over `horizon_days` future dates.
///
/// The supply model's own date extension drives the sequence, so both series
/// share identical date alignment. Each model is queried with ONE batched
/// call over the full sequence, never per date. Every value is floored at 0
/// and rows before `today` are dropped, which can leave the result empty
/// when the whole generated horizon lies in the past.
pub fn build_weekly_projection(
    supply: &dyn Forecaster,
    demand: &dyn Forecaster,
    horizon_days: u32,
    today: NaiveDate,
) -> ForecastResult<Vec<WeeklyForecastRow>> {
    let dates = supply.future_dates(horizon_days);
    let supply_series = supply.predict(&dates)?;
    let demand_series = demand.predict(&dates)?;

    // Trait contract: one estimate per date. Enforced here the same way
    // the point query reports it, as an error rather than a panic.
    for series in [&supply_series, &demand_series] {
        if series.len() != dates.len() {
            return Err(ForecastError::IncompleteBatch {
                requested: dates.len(),
                got: series.len(),
            });
        }
    }

    let mut rows = Vec::with_capacity(dates.len());
    for (i, date) in dates.iter().copied().enumerate() {
        if date < today {
            continue;
        }
        rows.push(WeeklyForecastRow {
            date,
            predicted_supply: supply_series[i].max(0.0),
            predicted_demand: demand_series[i].max(0.0),
        });
    }

    Ok(rows)
}

/// Group-selecting entry point: look up the group's models, project, and
/// derive the surplus/deficit envelope over the date axis.
///
/// The selectable groups are the supply collection's key set, so a group
/// absent from it is an error. A group missing only from the demand
/// collection degrades to a zero demand series, matching the zero
/// substitution in the point query.
pub fn project_group(
    models: &ModelSet,
    group: &BloodGroup,
    horizon_days: u32,
    today: NaiveDate,
) -> Result<ProjectionData, ServiceError> {
    let supply = models
        .supply
        .get(group)
        .ok_or_else(|| ServiceError::UnknownGroup(group.clone()))?;

    let rows = match models.demand.get(group) {
        Some(demand) => {
            build_weekly_projection(supply.as_ref(), demand.as_ref(), horizon_days, today)?
        }
        None => {
            let zero_demand = FittedForecaster::constant(0.0, supply.last_observed());
            build_weekly_projection(supply.as_ref(), &zero_demand, horizon_days, today)?
        }
    };

    let supply_series: Vec<f64> = rows.iter().map(|row| row.predicted_supply).collect();
    let demand_series: Vec<f64> = rows.iter().map(|row| row.predicted_demand).collect();
    let envelope = derive_envelope(&supply_series, &demand_series)?;

    Ok(ProjectionData {
        blood_group: group.clone(),
        horizon_days,
        rows,
        envelope,
    })
}
