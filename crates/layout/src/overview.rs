//! Month overview: year and month captions, weekday headers, the highlight
//! over the paged weeks, and day numbers.

use almanac_calendar::{MonthGrid, month_start, shift_month, week_start};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::COLUMNS_PER_MONTH;
use crate::element::{Anchor, Element};
use crate::error::LayoutError;
use crate::labels::Labels;

/// Font size of every overview text.
pub(crate) const OVERVIEW_FONT_SIZE: f64 = 3.0;

/// Days covered by one page.
pub const PAGE_DAYS: usize = 28;

/// Geometry of the overview rows.
pub(crate) struct Overview<'a> {
    pub left: f64,
    pub top: f64,
    pub day_width: f64,
    pub line_height: f64,
    pub labels: &'a Labels,
}

/// Month grids shown for a page starting at `start`: `count` consecutive
/// months from the month of the Monday on or before `start`.
pub fn overview_months(start: NaiveDate, count: usize) -> Result<Vec<MonthGrid>, LayoutError> {
    let first = month_start(week_start(start));
    (0..count)
        .map(|i| {
            let (year, month) = shift_month(first.year(), first.month(), i as i64);
            MonthGrid::new(year, month).map_err(LayoutError::from)
        })
        .collect()
}

impl Overview<'_> {
    fn month_x(&self, index: usize) -> f64 {
        self.left + (COLUMNS_PER_MONTH * index) as f64 * self.day_width
    }

    /// Right edge of day column `weekday` (Monday = 0) in month `index`.
    fn day_x(&self, index: usize, weekday: usize) -> f64 {
        self.month_x(index) + self.day_width + weekday as f64 * self.day_width
    }

    /// Appends the overview to `out` and returns the y of the first day row.
    /// The highlight covers the weeks from `start` up to `end`.
    pub fn emit(
        &self,
        months: &[MonthGrid],
        start: NaiveDate,
        end: NaiveDate,
        out: &mut Vec<Element>,
    ) -> f64 {
        let h = self.line_height;
        let mut t = self.top + h;

        let mut shown_year = None;
        for (i, grid) in months.iter().enumerate() {
            if shown_year == Some(grid.year()) {
                continue;
            }
            shown_year = Some(grid.year());
            out.push(Element::text(
                self.month_x(i),
                t,
                grid.year().to_string(),
                OVERVIEW_FONT_SIZE,
            ));
        }
        t += h;

        for (i, grid) in months.iter().enumerate() {
            let caption = format!("{} | {}", self.labels.month(grid.month()), grid.month());
            out.push(Element::text(self.month_x(i), t, caption, OVERVIEW_FONT_SIZE));
        }
        t += h;

        for i in 0..months.len() {
            for (k, name) in self.labels.weekdays_short.iter().enumerate() {
                out.push(Element::anchored_text(
                    self.day_x(i, k),
                    t,
                    name.as_str(),
                    OVERVIEW_FONT_SIZE,
                    Anchor::End,
                ));
            }
        }
        t += h;

        for (i, grid) in months.iter().enumerate() {
            let Some((top, bottom)) = highlight_rows(grid, start, end) else {
                debug!(year = grid.year(), month = grid.month(), "no highlighted weeks");
                continue;
            };
            out.push(Element::rect(
                self.month_x(i),
                t + top as f64 * h - h + 1.0,
                self.day_width * 7.0 + 2.0,
                (bottom - top) as f64 * h,
            ));
        }

        for (i, grid) in months.iter().enumerate() {
            for (j, week) in grid.weeks().iter().enumerate() {
                for (k, day) in week.iter().enumerate() {
                    if !grid.owns(*day) {
                        continue;
                    }
                    out.push(Element::anchored_text(
                        self.day_x(i, k),
                        t + j as f64 * h,
                        day.day().to_string(),
                        OVERVIEW_FONT_SIZE,
                        Anchor::End,
                    ));
                }
            }
        }
        t
    }
}

/// Week rows of `grid` to highlight for the span `[start, end)`.
///
/// `top` is the first row ending on or after `start`, `bottom` the first
/// row ending on or after `end`. A month whose first row already ends after
/// `end` is skipped; a missing `bottom` extends to the last row.
pub fn highlight_rows(grid: &MonthGrid, start: NaiveDate, end: NaiveDate) -> Option<(usize, usize)> {
    let weeks = grid.weeks();
    let first_row_end = weeks.first()?[6];
    if first_row_end > end {
        return None;
    }
    let top = weeks.iter().position(|week| week[6] >= start)?;
    let bottom = weeks[top..]
        .iter()
        .position(|week| week[6] >= end)
        .map_or(weeks.len(), |offset| top + offset);
    Some((top, bottom))
}
