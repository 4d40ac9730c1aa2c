//! Per-day astronomical annotations in local time.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;

use crate::error::AstroError;
use crate::location::Location;
use crate::moon::moon_phase;
use crate::sun::sun_times;
use crate::zodiac::{ZodiacSign, zodiac_sign};

/// Everything printed in a day cell besides the date and events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAnnotation {
    pub date: NaiveDate,
    /// Local sunrise time.
    pub sunrise: NaiveTime,
    /// Local sunset time.
    pub sunset: NaiveTime,
    /// Sunset minus sunrise.
    pub daylight: TimeDelta,
    /// Next day's sunrise minus this day's sunset.
    pub night: TimeDelta,
    /// Moon phase on the 0..=7 scale, 0 being new moon.
    pub moon_phase: u8,
    pub zodiac: ZodiacSign,
}

/// Computes [`DayAnnotation`]s for one location.
///
/// Times are shown in the location's own zone unless
/// [`Annotator::with_timezone`] overrides it.
#[derive(Debug, Clone)]
pub struct Annotator {
    location: Location,
    timezone: Tz,
}

impl Annotator {
    pub fn new(location: Location) -> Self {
        let timezone = location.timezone();
        Self { location, timezone }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Annotates one date.
    ///
    /// # Errors
    ///
    /// Propagates [`AstroError`] from the sun computation for this date or
    /// the next one (needed for the night length).
    pub fn annotate(&self, date: NaiveDate) -> Result<DayAnnotation, AstroError> {
        let today = sun_times(date, &self.location)?;
        let next_date = date.succ_opt().ok_or(AstroError::OutOfRange { date })?;
        let tomorrow = sun_times(next_date, &self.location)?;

        Ok(DayAnnotation {
            date,
            sunrise: today.sunrise.with_timezone(&self.timezone).time(),
            sunset: today.sunset.with_timezone(&self.timezone).time(),
            daylight: today.daylight(),
            night: tomorrow.sunrise - today.sunset,
            moon_phase: moon_phase(date, self.timezone),
            zodiac: zodiac_sign(date),
        })
    }
}
