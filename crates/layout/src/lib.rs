//! # almanac-layout
//!
//! Turns a start date, event rules and a location into the positioned
//! elements of one calendar page: a multi-month overview along the top and
//! a four-week grid of day cells below it.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     A["PageGeometry"] -->|"canvas()"| B["Region"]
//!     B --> C["layout()"]
//!     R["EventRule list"] -->|"Expander"| C
//!     N["Annotator"] --> C
//!     C --> O["overview: years, months, weekdays, highlight, days"]
//!     C --> D["detail grid: 4 x 7 day cells"]
//!     O --> E["Vec of Element"]
//!     D --> E
//! ```
//!
//! The overview starts at the month of the Monday on or before the start
//! date. Each month takes eight day columns; [`MonthFit`] decides how many
//! months are shown and how wide a column is.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `page` | Page geometry, markers and the `layout` entry point |
//! | `overview` | Month overview rows and the highlight rectangles |
//! | `detail` | Day cells with astronomical and event lines |
//! | `config` | Month fit and layout options |
//! | `labels` | Month, weekday and glyph tables |
//! | `element` | Output primitives |
//! | `format` | `HH:MM` formatting |
//! | `error` | Error types |

mod config;
mod detail;
mod element;
mod error;
mod format;
mod labels;
mod overview;
mod page;

pub use config::{COLUMNS_PER_MONTH, LayoutConfig, MAX_MONTHS, MonthFit};
pub use detail::split_icon;
pub use element::{Anchor, Element};
pub use error::LayoutError;
pub use format::{duration_hh_mm, time_hh_mm};
pub use labels::Labels;
pub use overview::{PAGE_DAYS, highlight_rows, overview_months};
pub use page::{Page, PageGeometry, compose_page, layout, page_markers};
