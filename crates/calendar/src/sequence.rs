//! Date sequence generation.

use chrono::{Datelike, Days, NaiveDate};

/// Generates `n_days` consecutive dates starting at `start`.
///
/// The sequence stops early if the calendar's representable range is
/// exhausted.
///
/// # Example
///
/// ```
/// use almanac_calendar::date_sequence;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
/// let dates = date_sequence(start, 4);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
pub fn date_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    start.iter_days().take(n_days).collect()
}

/// Returns the Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
