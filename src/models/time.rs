//! Calendar date helpers.

use chrono::{Days, NaiveDate, Utc};

/// Today's calendar date (UTC), with the time-of-day stripped.
///
/// Projection filtering compares against this normalized date so that a
/// forecast for "today" is kept regardless of the current time.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

/// Contiguous sequence of `days` dates starting at `start` (inclusive).
pub fn date_range(start: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .map(|offset| start + Days::new(u64::from(offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_contiguous() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let dates = date_range(start, 4);
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], start);
        // Crosses the leap-year February boundary.
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn test_date_range_empty() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(date_range(start, 0).is_empty());
    }
}
