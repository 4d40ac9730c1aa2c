//! Julian day conversions.

use chrono::{DateTime, NaiveDate, Utc};

/// Julian day of the Unix epoch.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian day of 2000-01-01 12:00 TT.
pub const J2000: f64 = 2_451_545.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day of a UTC instant.
pub fn from_utc(instant: DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 / SECONDS_PER_DAY
        + f64::from(instant.timestamp_subsec_millis()) / (SECONDS_PER_DAY * 1000.0)
        + UNIX_EPOCH_JD
}

/// UTC instant of a Julian day, rounded to the second.
///
/// Returns `None` if the instant is outside chrono's range.
pub fn to_utc(jd: f64) -> Option<DateTime<Utc>> {
    let seconds = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round();
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0)
}

/// Whole days from 2000-01-01 to `date`.
pub fn days_since_2000(date: NaiveDate) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);
    (date - epoch).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn epoch_round_trip() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(from_utc(epoch), UNIX_EPOCH_JD);
        assert_eq!(to_utc(UNIX_EPOCH_JD), Some(epoch));
    }

    #[test]
    fn j2000_is_noon() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_abs_diff_eq!(from_utc(noon), J2000);
    }

    #[test]
    fn days_since_2000_counts_leap_days() {
        let date = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        assert_eq!(days_since_2000(date), 366);
    }

    #[test]
    fn non_finite_is_none() {
        assert_eq!(to_utc(f64::NAN), None);
    }
}
