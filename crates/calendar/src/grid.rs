//! Monday-first week rows covering a month.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;
use crate::month::days_in_month;
use crate::sequence::week_start;

/// The full weeks (Monday..Sunday) that contain at least one day of a month.
///
/// Rows at the edges include days of the neighbouring months; use
/// [`MonthGrid::owns`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
    weeks: Vec<[NaiveDate; 7]>,
}

impl MonthGrid {
    /// Builds the week rows for `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is invalid or out of range.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let n_days = days_in_month(year, month)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::OutOfRange { year, month })?;
        let last = first
            .checked_add_days(Days::new(u64::from(n_days - 1)))
            .ok_or(CalendarError::OutOfRange { year, month })?;

        let mut weeks = Vec::with_capacity(6);
        let mut monday = week_start(first);
        while monday <= last {
            let mut row = [monday; 7];
            for (offset, slot) in row.iter_mut().enumerate() {
                *slot = monday
                    .checked_add_days(Days::new(offset as u64))
                    .ok_or(CalendarError::OutOfRange { year, month })?;
            }
            weeks.push(row);
            monday = row[6]
                .succ_opt()
                .ok_or(CalendarError::OutOfRange { year, month })?;
        }
        Ok(Self { first, weeks })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Week rows, earliest first.
    pub fn weeks(&self) -> &[[NaiveDate; 7]] {
        &self.weeks
    }

    /// Returns `true` if `date` belongs to this month rather than to a
    /// neighbouring month that shares an edge row.
    pub fn owns(&self, date: NaiveDate) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }
}
