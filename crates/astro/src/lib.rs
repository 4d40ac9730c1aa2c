//! # almanac-astro
//!
//! Astronomical facts printed in calendar day cells: sunrise and sunset,
//! day and night length, the moon phase and the zodiac sign.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     L["Location"] --> A["Annotator"]
//!     A -->|"sun_times()"| S["SunTimes (UTC)"]
//!     A -->|"moon_phase()"| M["0..=7"]
//!     A -->|"zodiac_sign()"| Z["ZodiacSign"]
//!     S --> D["DayAnnotation (local)"]
//!     M --> D
//!     Z --> D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use almanac_astro::{Annotator, Location};
//! use chrono::NaiveDate;
//!
//! let annotator = Annotator::new(Location::named("Vilnius").unwrap());
//! let day = annotator
//!     .annotate(NaiveDate::from_ymd_opt(2024, 3, 21).unwrap())
//!     .unwrap();
//! assert_eq!(day.zodiac.name, "Aries");
//! assert!(day.moon_phase <= 7);
//! assert!(day.daylight.num_hours() >= 12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `location` | Built-in locations and time zone parsing |
//! | `sun` | Sunrise equation |
//! | `moon` | Quarter instants and phase index |
//! | `zodiac` | Sign table by calendar date |
//! | `annotate` | Per-day annotation in local time |
//! | `julian` | Julian day conversions |
//! | `error` | Error types |

mod annotate;
mod error;
mod julian;
mod location;
mod moon;
mod sun;
mod zodiac;

pub use annotate::{Annotator, DayAnnotation};
pub use error::AstroError;
pub use location::{Location, parse_timezone};
pub use moon::{Quarter, QuarterEvent, moon_phase, next_quarter, quarter_jd};
pub use sun::{SunTimes, sun_times};
pub use zodiac::{ZODIAC, ZodiacSign, zodiac_sign};
