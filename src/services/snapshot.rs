//! Daily inventory snapshot builder.

use chrono::NaiveDate;

use crate::api::{DailySnapshotData, DailySnapshotRow};
use crate::models::{ForecastResult, ModelSet};
use crate::services::envelope::derive_envelope;
use crate::services::query::predict_point;
use crate::services::ServiceError;

/// Build the per-group inventory snapshot for one target date.
///
/// Iterates the sorted key set of the supply collection, so the output is
/// deterministic and contains exactly one row per supply-collection group,
/// regardless of how complete the demand/availability collections are.
/// An empty supply collection yields an empty snapshot.
pub fn build_daily_snapshot(
    models: &ModelSet,
    target_date: NaiveDate,
) -> ForecastResult<Vec<DailySnapshotRow>> {
    let mut rows = Vec::with_capacity(models.supply.len());

    for group in models.supply.sorted_groups() {
        let availability = predict_point(&models.availability, &group, target_date)?;
        let supply = predict_point(&models.supply, &group, target_date)?;
        let demand = predict_point(&models.demand, &group, target_date)?;

        rows.push(DailySnapshotRow {
            blood_group: group,
            starting_inventory: availability,
            total_available_supply: availability + supply,
            predicted_demand: demand,
        });
    }

    Ok(rows)
}

/// Snapshot rows plus the surplus/deficit envelope over the group axis
/// (total available supply vs predicted demand), ready for the frontend.
pub fn snapshot_data(
    models: &ModelSet,
    target_date: NaiveDate,
) -> Result<DailySnapshotData, ServiceError> {
    let rows = build_daily_snapshot(models, target_date)?;

    let supply_side: Vec<f64> = rows
        .iter()
        .map(|row| row.total_available_supply as f64)
        .collect();
    let demand_side: Vec<f64> = rows.iter().map(|row| row.predicted_demand as f64).collect();
    let envelope = derive_envelope(&supply_side, &demand_side)?;

    Ok(DailySnapshotData {
        target_date,
        rows,
        envelope,
    })
}
