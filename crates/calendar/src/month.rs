//! Month lengths and month stepping.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Returns the number of days in `month` of `year` (leap years included).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12 and
/// [`CalendarError::OutOfRange`] if the year cannot be represented.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::OutOfRange { year, month })?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or(
        CalendarError::OutOfRange {
            year: next_year,
            month: next_month,
        },
    )?;
    Ok((next - first).num_days() as u32)
}

/// Returns the first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month chrono can represent.
    date.with_day(1).unwrap_or(date)
}

/// Moves `(year, month)` by `delta` months, carrying into the year.
///
/// `month` is expected in 1..=12; the result is always in 1..=12.
pub fn shift_month(year: i32, month: u32, delta: i64) -> (i32, u32) {
    let index = i64::from(year) * 12 + i64::from(month) - 1 + delta;
    let year = index.div_euclid(12) as i32;
    let month = index.rem_euclid(12) as u32 + 1;
    (year, month)
}
