//! Sunrise and sunset from the NOAA sunrise equation.
//!
//! Accuracy is about a minute at mid latitudes, which is all a printed
//! calendar needs.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::AstroError;
use crate::julian::{self, J2000};
use crate::location::Location;

/// Obliquity of the ecliptic in degrees.
const OBLIQUITY: f64 = 23.4397;

/// Solar altitude at sunrise and sunset: refraction plus the solar radius.
const HORIZON_ALTITUDE: f64 = -0.833;

/// Sunrise and sunset of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Time between sunrise and sunset.
    pub fn daylight(&self) -> chrono::TimeDelta {
        self.sunset - self.sunrise
    }
}

/// Computes sunrise and sunset for `date` at `location`.
///
/// The day is the one whose solar noon falls nearest to `date` at the
/// location's longitude, so both instants are close to the local calendar
/// day regardless of time zone.
///
/// # Errors
///
/// Returns [`AstroError::NoSunrise`] during polar night,
/// [`AstroError::NoSunset`] during midnight sun, and
/// [`AstroError::OutOfRange`] if the instants cannot be represented.
pub fn sun_times(date: NaiveDate, location: &Location) -> Result<SunTimes, AstroError> {
    let n = julian::days_since_2000(date) as f64 + 0.0008;
    let mean_solar_noon = n - location.longitude() / 360.0;

    let anomaly = (357.5291 + 0.985_600_28 * mean_solar_noon).rem_euclid(360.0);
    let center = 1.9148 * sin_deg(anomaly)
        + 0.02 * sin_deg(2.0 * anomaly)
        + 0.0003 * sin_deg(3.0 * anomaly);
    let ecliptic_longitude = (anomaly + center + 180.0 + 102.9372).rem_euclid(360.0);
    let transit = J2000 + mean_solar_noon + 0.0053 * sin_deg(anomaly)
        - 0.0069 * sin_deg(2.0 * ecliptic_longitude);

    let sin_declination = sin_deg(ecliptic_longitude) * sin_deg(OBLIQUITY);
    let cos_declination = sin_declination.asin().cos();

    // Higher observers see the sun earlier.
    let altitude = HORIZON_ALTITUDE - 2.076 * location.elevation().max(0.0).sqrt() / 60.0;
    let latitude = location.latitude();
    let cos_hour_angle = (sin_deg(altitude) - sin_deg(latitude) * sin_declination)
        / (cos_deg(latitude) * cos_declination);

    if cos_hour_angle > 1.0 {
        return Err(AstroError::NoSunrise { date });
    }
    if cos_hour_angle < -1.0 {
        return Err(AstroError::NoSunset { date });
    }
    let hour_angle = cos_hour_angle.acos().to_degrees();

    let instant = |jd: f64| julian::to_utc(jd).ok_or(AstroError::OutOfRange { date });
    Ok(SunTimes {
        sunrise: instant(transit - hour_angle / 360.0)?,
        sunset: instant(transit + hour_angle / 360.0)?,
    })
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn minutes_apart(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
        (a - b).num_minutes().abs()
    }

    #[test]
    fn vilnius_midsummer() {
        let vilnius = Location::named("Vilnius").unwrap();
        let t = sun_times(date(2024, 6, 21), &vilnius).unwrap();
        let rise = Utc.with_ymd_and_hms(2024, 6, 21, 1, 39, 12).unwrap();
        let set = Utc.with_ymd_and_hms(2024, 6, 21, 19, 4, 27).unwrap();
        assert!(minutes_apart(t.sunrise, rise) <= 1, "{}", t.sunrise);
        assert!(minutes_apart(t.sunset, set) <= 1, "{}", t.sunset);
        assert!(t.daylight().num_minutes() > 17 * 60);
    }

    #[test]
    fn vilnius_midwinter() {
        let vilnius = Location::named("Vilnius").unwrap();
        let t = sun_times(date(2024, 12, 21), &vilnius).unwrap();
        assert_eq!(t.sunrise.hour(), 6);
        assert_eq!(t.sunset.hour(), 13);
        assert!(t.daylight().num_hours() == 7);
    }

    #[test]
    fn equinox_is_about_twelve_hours() {
        let vilnius = Location::named("Vilnius").unwrap();
        let t = sun_times(date(2024, 3, 20), &vilnius).unwrap();
        let minutes = t.daylight().num_minutes();
        assert!((12 * 60..=12 * 60 + 20).contains(&minutes), "{minutes}");
    }

    #[test]
    fn london_midsummer() {
        let london = Location::named("London").unwrap();
        let t = sun_times(date(2024, 6, 21), &london).unwrap();
        let rise = Utc.with_ymd_and_hms(2024, 6, 21, 3, 43, 18).unwrap();
        assert!(minutes_apart(t.sunrise, rise) <= 1, "{}", t.sunrise);
    }

    #[test]
    fn polar_night_and_midnight_sun() {
        let tromso = Location::named("Tromsø").unwrap();
        assert_eq!(
            sun_times(date(2024, 12, 21), &tromso),
            Err(AstroError::NoSunrise {
                date: date(2024, 12, 21)
            })
        );
        assert_eq!(
            sun_times(date(2024, 6, 21), &tromso),
            Err(AstroError::NoSunset {
                date: date(2024, 6, 21)
            })
        );
    }

    #[test]
    fn elevation_lengthens_the_day() {
        let low = Location::new("low", 54.0, 25.0, 0.0, chrono_tz::UTC);
        let high = Location::new("high", 54.0, 25.0, 2000.0, chrono_tz::UTC);
        let d = date(2024, 5, 1);
        let low = sun_times(d, &low).unwrap();
        let high = sun_times(d, &high).unwrap();
        assert!(high.daylight() > low.daylight());
    }
}
