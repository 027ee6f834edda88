//! Period label generation for the monthly and yearly cadences

use chrono::{DateTime, Datelike, Duration, Utc};

pub const MONTHLY_POINTS: usize = 12;
pub const YEARLY_POINTS: usize = 8;

/// Labels for the trailing 12 months, oldest first, ending at the month of
/// `now`.
///
/// Steps back in fixed 30-day increments rather than true calendar months,
/// so a label can occasionally repeat or skip near month boundaries. The
/// cache and charts key on position, not label, so the approximation is
/// kept.
pub fn monthly_labels(now: DateTime<Utc>) -> Vec<String> {
    (0..MONTHLY_POINTS)
        .rev()
        .map(|i| (now - Duration::days(30 * i as i64)).format("%Y-%m").to_string())
        .collect()
}

/// Labels for the trailing 8 calendar years, oldest first, ending at the
/// year of `now`.
pub fn yearly_labels(now: DateTime<Utc>) -> Vec<String> {
    (0..YEARLY_POINTS as i32)
        .rev()
        .map(|i| (now.year() - i).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_monthly_labels_fixed_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let labels = monthly_labels(now);

        assert_eq!(labels.len(), 12);
        assert_eq!(labels.last().unwrap(), "2024-03");
        // 30-day steps, not calendar months: 2024-03-15 minus 330 days lands
        // in April 2023, so the window opens there rather than at 2023-04-15
        // minus one calendar year.
        assert_eq!(labels.first().unwrap(), "2023-04");

        for pair in labels.windows(2) {
            assert!(pair[0] <= pair[1], "labels must be non-decreasing: {:?}", pair);
        }
    }

    #[test]
    fn test_monthly_labels_step_approximation() {
        // Every label is exactly what the 30-day step produces
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let labels = monthly_labels(now);

        for (pos, label) in labels.iter().enumerate() {
            let back = (MONTHLY_POINTS - 1 - pos) as i64;
            let expected = (now - Duration::days(30 * back)).format("%Y-%m").to_string();
            assert_eq!(*label, expected);
        }
    }

    #[test]
    fn test_yearly_labels_fixed_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let labels = yearly_labels(now);

        assert_eq!(labels.len(), 8);
        assert_eq!(
            labels,
            ["2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024"]
        );
    }
}
