//! Error types for the almanac-astro crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the almanac-astro crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AstroError {
    /// Returned when a location name is not in the location table.
    #[error("unknown location {name:?}")]
    UnknownLocation {
        /// The name that was looked up.
        name: String,
    },

    /// Returned when a time zone identifier is not a known IANA zone.
    #[error("unknown time zone {name:?}")]
    UnknownTimezone {
        /// The identifier that was looked up.
        name: String,
    },

    /// Returned when the sun stays below the horizon all day.
    #[error("no sunrise on {date} (polar night)")]
    NoSunrise {
        /// The date without a sunrise.
        date: NaiveDate,
    },

    /// Returned when the sun stays above the horizon all day.
    #[error("no sunset on {date} (midnight sun)")]
    NoSunset {
        /// The date without a sunset.
        date: NaiveDate,
    },

    /// Returned when an event time cannot be represented.
    #[error("event time out of range on {date}")]
    OutOfRange {
        /// The date being computed.
        date: NaiveDate,
    },
}
