use std::sync::Arc;

use chrono::NaiveDate;

use hemocast::api::BloodGroup;
use hemocast::models::{FittedForecaster, Forecaster, ModelCollection, ModelSet};
use hemocast::services::{
    build_daily_snapshot, build_weekly_projection, derive_envelope, predict_point, project_group,
    snapshot_data,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn flat(value: f64, last_observed: NaiveDate) -> Arc<dyn Forecaster> {
    Arc::new(FittedForecaster::constant(value, last_observed))
}

fn collection(entries: &[(&str, f64)], last_observed: NaiveDate) -> ModelCollection {
    entries
        .iter()
        .map(|&(group, value)| (BloodGroup::from(group), flat(value, last_observed)))
        .collect()
}

/// The scenario from the dashboard's degradation contract: supply knows two
/// groups, demand knows one, availability knows none.
#[test]
fn test_snapshot_with_incomplete_collections() {
    let last = date(2024, 3, 1);
    let models = ModelSet {
        supply: collection(&[("A+", 6.2), ("O-", 3.9)], last),
        demand: collection(&[("A+", 4.4)], last),
        availability: ModelCollection::new(),
    };
    let target = date(2024, 3, 8);

    let rows = build_daily_snapshot(&models, target).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].blood_group, BloodGroup::from("A+"));
    assert_eq!(rows[0].starting_inventory, 0);
    assert_eq!(rows[0].total_available_supply, 6);
    assert_eq!(rows[0].predicted_demand, 4);

    assert_eq!(rows[1].blood_group, BloodGroup::from("O-"));
    assert_eq!(rows[1].starting_inventory, 0);
    assert_eq!(rows[1].predicted_demand, 0);
    assert_eq!(
        rows[1].total_available_supply,
        predict_point(&models.supply, &rows[1].blood_group, target).unwrap()
    );
}

#[test]
fn test_snapshot_data_end_to_end() {
    let last = date(2024, 3, 1);
    let models = ModelSet {
        supply: collection(&[("A+", 5.0), ("B-", 1.0)], last),
        demand: collection(&[("A+", 9.0), ("B-", 0.0)], last),
        availability: collection(&[("A+", 2.0), ("B-", 2.0)], last),
    };

    let data = snapshot_data(&models, date(2024, 3, 8)).unwrap();

    // total available supply = availability + supply
    assert_eq!(data.rows[0].total_available_supply, 7);
    assert_eq!(data.rows[1].total_available_supply, 3);
    // envelope over the group axis: total available vs demand
    assert_eq!(data.envelope.upper, vec![9.0, 3.0]);
    assert_eq!(data.envelope.lower, vec![7.0, 0.0]);
}

#[test]
fn test_projection_end_to_end() {
    let last = date(2024, 3, 1);
    let mut supply = ModelCollection::new();
    supply.insert(BloodGroup::from("A+"), flat(7.0, last));
    let mut demand = ModelCollection::new();
    demand.insert(BloodGroup::from("A+"), flat(4.0, last));
    let models = ModelSet {
        supply,
        demand,
        availability: ModelCollection::new(),
    };

    let data = project_group(&models, &BloodGroup::from("A+"), 28, last).unwrap();

    assert_eq!(data.rows.len(), 28);
    assert_eq!(data.rows[0].date, date(2024, 3, 2));
    for pair in data.rows.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    assert!(data.envelope.upper.iter().all(|&v| v == 7.0));
    assert!(data.envelope.lower.iter().all(|&v| v == 4.0));
}

#[test]
fn test_projection_empty_when_horizon_in_past() {
    let last = date(2020, 1, 1);
    let rows = build_weekly_projection(
        flat(5.0, last).as_ref(),
        flat(3.0, last).as_ref(),
        28,
        date(2024, 3, 1),
    )
    .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_envelope_reference_scenario() {
    let envelope = derive_envelope(&[5.0, 7.0, 3.0], &[4.0, 8.0, 2.0]).unwrap();
    assert_eq!(envelope.upper, vec![5.0, 8.0, 3.0]);
    assert_eq!(envelope.lower, vec![4.0, 7.0, 2.0]);
}
