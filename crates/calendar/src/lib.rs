//! # almanac-calendar
//!
//! Pure Gregorian date arithmetic used by the page layout and the recurrence
//! engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"week_start()"| B["Monday on/before"]
//!     A -->|"month_start()"| C["1st of month"]
//!     C -->|"shift_month()"| C
//!     C -->|"MonthGrid::new()"| D["weeks: [[NaiveDate; 7]]"]
//!     A -->|"date_sequence()"| E["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_calendar::{MonthGrid, date_sequence, week_start};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
//! assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//!
//! let grid = MonthGrid::new(2024, 3).unwrap();
//! assert_eq!(grid.weeks().len(), 5);
//! assert_eq!(grid.weeks()[0][0], NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
//!
//! let window = date_sequence(date, 28);
//! assert_eq!(window.len(), 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month lengths, month starts and month stepping |
//! | `grid` | Monday-first week rows covering a month |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod error;
mod grid;
mod month;
mod sequence;

pub use error::CalendarError;
pub use grid::MonthGrid;
pub use month::{days_in_month, month_start, shift_month};
pub use sequence::{date_sequence, week_start};
