#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::api::BloodGroup;
    use crate::models::{FittedForecaster, ForecastError, Forecaster, ModelCollection};
    use crate::services::query::predict_point;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn collection_with(group: &str, model: FittedForecaster) -> ModelCollection {
        let mut collection = ModelCollection::new();
        collection.insert(BloodGroup::from(group), Arc::new(model) as Arc<dyn Forecaster>);
        collection
    }

    fn flat(value: f64) -> FittedForecaster {
        FittedForecaster::constant(value, date(2024, 3, 1))
    }

    #[test]
    fn test_missing_group_is_zero() {
        let collection = collection_with("A+", flat(12.0));
        let prediction = predict_point(&collection, &BloodGroup::from("O-"), date(2024, 3, 8));
        assert_eq!(prediction.unwrap(), 0);
    }

    #[test]
    fn test_missing_group_is_zero_for_any_date() {
        let collection = ModelCollection::new();
        for d in [date(1990, 1, 1), date(2024, 3, 8), date(2100, 12, 31)] {
            let prediction = predict_point(&collection, &BloodGroup::from("AB-"), d);
            assert_eq!(prediction.unwrap(), 0);
        }
    }

    #[test]
    fn test_rounds_to_nearest_integer() {
        let group = BloodGroup::from("A+");

        let collection = collection_with("A+", flat(4.6));
        assert_eq!(predict_point(&collection, &group, date(2024, 3, 8)).unwrap(), 5);

        let collection = collection_with("A+", flat(4.4));
        assert_eq!(predict_point(&collection, &group, date(2024, 3, 8)).unwrap(), 4);
    }

    #[test]
    fn test_negative_estimate_clamped_to_zero() {
        let collection = collection_with("A+", flat(-3.2));
        let prediction = predict_point(&collection, &BloodGroup::from("A+"), date(2024, 3, 8));
        assert_eq!(prediction.unwrap(), 0);
    }

    #[test]
    fn test_model_failure_propagates() {
        // A present-but-broken model must fail loudly, never degrade to 0.
        let mut broken = flat(5.0);
        broken.base = f64::NAN;
        let collection = collection_with("A+", broken);

        let result = predict_point(&collection, &BloodGroup::from("A+"), date(2024, 3, 8));
        assert!(matches!(
            result.unwrap_err(),
            ForecastError::NonFiniteEstimate { .. }
        ));
    }

    #[test]
    fn test_deterministic_for_fixed_model_and_date() {
        let collection = collection_with("A+", flat(7.3));
        let group = BloodGroup::from("A+");
        let first = predict_point(&collection, &group, date(2024, 3, 8)).unwrap();
        let second = predict_point(&collection, &group, date(2024, 3, 8)).unwrap();
        assert_eq!(first, second);
    }
}
