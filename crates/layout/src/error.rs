//! Error types for the almanac-layout crate.

use almanac_astro::AstroError;
use almanac_calendar::CalendarError;
use chrono::NaiveDate;

/// Error type for all fallible operations in the almanac-layout crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when a fixed month count is outside `1..=12`.
    #[error("month count must be between 1 and {max}, got {months}")]
    InvalidMonthCount {
        /// The configured count.
        months: usize,
        /// The largest supported count.
        max: usize,
    },

    /// Returned when the configured day width is not a positive number.
    #[error("day width must be positive and finite, got {day_width}")]
    InvalidDayWidth {
        /// The configured width in millimetres.
        day_width: f64,
    },

    /// Returned when not even one month fits the canvas.
    #[error("canvas width {width} mm cannot fit one month at {day_width} mm per day")]
    CanvasTooNarrow {
        /// Canvas width in millimetres.
        width: f64,
        /// Day column width in millimetres.
        day_width: f64,
    },

    /// Returned when the days of a page run past the last representable date.
    #[error("page starting {start} runs past the last supported date")]
    DateOutOfRange {
        /// First day of the page.
        start: NaiveDate,
    },

    /// Day annotation failed.
    #[error(transparent)]
    Astro(#[from] AstroError),

    /// Month grid construction failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
