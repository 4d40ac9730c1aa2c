//! Named observing locations.

use chrono_tz::Tz;

use crate::error::AstroError;

/// A place on Earth with its local time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: Tz,
}

/// Built-in locations: name, latitude, longitude (east positive), elevation
/// in metres, time zone.
const KNOWN_LOCATIONS: [(&str, f64, f64, f64, Tz); 10] = [
    ("Vilnius", 54.6872, 25.2797, 112.0, chrono_tz::Europe::Vilnius),
    ("Kaunas", 54.8985, 23.9036, 48.0, chrono_tz::Europe::Vilnius),
    ("Riga", 56.9496, 24.1052, 6.0, chrono_tz::Europe::Riga),
    ("Tallinn", 59.4370, 24.7536, 9.0, chrono_tz::Europe::Tallinn),
    ("Warsaw", 52.2297, 21.0122, 100.0, chrono_tz::Europe::Warsaw),
    ("Berlin", 52.5200, 13.4050, 34.0, chrono_tz::Europe::Berlin),
    ("London", 51.5074, -0.1278, 11.0, chrono_tz::Europe::London),
    ("Greenwich", 51.4769, -0.0005, 47.0, chrono_tz::Europe::London),
    ("New York", 40.7128, -74.0060, 10.0, chrono_tz::America::New_York),
    ("Tromsø", 69.6492, 18.9553, 10.0, chrono_tz::Europe::Oslo),
];

impl Location {
    /// Creates a location from explicit coordinates.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: Tz,
    ) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
            timezone,
        }
    }

    /// Looks up a built-in location by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AstroError::UnknownLocation`] if the name is not in the
    /// table.
    pub fn named(name: &str) -> Result<Self, AstroError> {
        let wanted = name.trim().to_lowercase();
        KNOWN_LOCATIONS
            .iter()
            .find(|(known, ..)| known.to_lowercase() == wanted)
            .map(|&(known, latitude, longitude, elevation, timezone)| {
                Self::new(known, latitude, longitude, elevation, timezone)
            })
            .ok_or_else(|| AstroError::UnknownLocation {
                name: name.to_string(),
            })
    }

    /// Names of all built-in locations.
    pub fn known_names() -> impl Iterator<Item = &'static str> {
        KNOWN_LOCATIONS.iter().map(|(name, ..)| *name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation above sea level in metres.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// The location's own time zone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

/// Parses an IANA time zone identifier such as `Europe/Vilnius`.
///
/// # Errors
///
/// Returns [`AstroError::UnknownTimezone`] if the identifier is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, AstroError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AstroError::UnknownTimezone {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_is_case_insensitive() {
        let loc = Location::named("vilnius").unwrap();
        assert_eq!(loc.name(), "Vilnius");
        assert_eq!(loc.timezone(), chrono_tz::Europe::Vilnius);
        assert!(loc.latitude() > 54.0 && loc.latitude() < 55.0);
    }

    #[test]
    fn named_with_space() {
        let loc = Location::named(" New York ").unwrap();
        assert!(loc.longitude() < 0.0);
    }

    #[test]
    fn unknown_location() {
        assert_eq!(
            Location::named("Atlantis").unwrap_err(),
            AstroError::UnknownLocation {
                name: "Atlantis".into()
            }
        );
    }

    #[test]
    fn every_known_name_resolves() {
        for name in Location::known_names() {
            assert!(Location::named(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn timezone_parse() {
        assert_eq!(
            parse_timezone("Europe/Vilnius").unwrap(),
            chrono_tz::Europe::Vilnius
        );
        assert_eq!(
            parse_timezone("Mars/Olympus").unwrap_err(),
            AstroError::UnknownTimezone {
                name: "Mars/Olympus".into()
            }
        );
    }
}
