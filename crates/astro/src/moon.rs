//! Moon quarter instants and the eight-step phase index.
//!
//! Quarter instants use the periodic terms of Meeus, *Astronomical
//! Algorithms*, chapter 49. They are good to a minute or two for
//! centuries around 2000.

use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::julian;

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Julian ephemeris day of the mean new moon of 2000-01-06.
const NEW_MOON_EPOCH: f64 = 2_451_550.097_66;

/// Difference between terrestrial and universal time, in seconds.
const DELTA_T_SECONDS: f64 = 69.0;

/// One of the four principal moon phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl Quarter {
    const ALL: [Quarter; 4] = [
        Quarter::New,
        Quarter::FirstQuarter,
        Quarter::Full,
        Quarter::LastQuarter,
    ];

    /// Phase index of this quarter on the 0..=7 scale.
    pub fn phase_index(self) -> u8 {
        match self {
            Quarter::New => 0,
            Quarter::FirstQuarter => 2,
            Quarter::Full => 4,
            Quarter::LastQuarter => 6,
        }
    }

    fn from_lunation_index(k: i64) -> Self {
        Self::ALL[k.rem_euclid(4) as usize]
    }
}

/// A quarter and the instant it happens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterEvent {
    pub quarter: Quarter,
    /// Julian day (UT).
    pub jd: f64,
}

/// Julian day (UT) of quarter number `kq`, counting quarters from the new
/// moon of 2000-01-06 (`kq = 0`).
pub fn quarter_jd(kq: i64) -> f64 {
    let k = kq as f64 / 4.0;
    let quarter = Quarter::from_lunation_index(kq);
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = NEW_MOON_EPOCH + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = 2.5534 + 29.105_356_7 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3;
    let mp = 201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4;
    let f = 160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4;
    let omega = 124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3;

    let correction = match quarter {
        Quarter::New | Quarter::Full => syzygy_terms(quarter, e, m, mp, f, omega),
        Quarter::FirstQuarter | Quarter::LastQuarter => {
            let w = 0.003_06 - 0.000_38 * e * cos(m) + 0.000_26 * cos(mp) - 0.000_02 * cos(mp - m)
                + 0.000_02 * cos(mp + m)
                + 0.000_02 * cos(2.0 * f);
            let sign = if quarter == Quarter::FirstQuarter { 1.0 } else { -1.0 };
            quadrature_terms(e, m, mp, f, omega) + sign * w
        }
    };

    mean + correction + planetary_terms(k, t2) - DELTA_T_SECONDS / 86_400.0
}

/// The first quarter event at or after Julian day `jd`.
pub fn next_quarter(jd: f64) -> QuarterEvent {
    let mut kq = ((jd - NEW_MOON_EPOCH) / SYNODIC_MONTH * 4.0).floor() as i64 - 2;
    loop {
        let event_jd = quarter_jd(kq);
        if event_jd >= jd {
            return QuarterEvent {
                quarter: Quarter::from_lunation_index(kq),
                jd: event_jd,
            };
        }
        kq += 1;
    }
}

/// Eight-step moon phase of `date` in time zone `tz`.
///
/// 0 is new, 2 first quarter, 4 full, 6 last quarter. A day whose local
/// midnight is within one day of a quarter gets that quarter's index; other
/// days get the odd index of the waxing or waning step in between.
pub fn moon_phase(date: NaiveDate, tz: Tz) -> u8 {
    let midnight = date.and_time(NaiveTime::MIN);
    let offset = tz
        .offset_from_local_datetime(&midnight)
        .earliest()
        .map_or(0, |o| o.fix().local_minus_utc());
    let jd = julian::from_utc(midnight.and_utc()) - f64::from(offset) / 86_400.0;

    let next = next_quarter(jd);
    let index = next.quarter.phase_index();
    if next.jd - jd > 1.0 {
        (index + 7) % 8
    } else {
        index
    }
}

fn syzygy_terms(quarter: Quarter, e: f64, m: f64, mp: f64, f: f64, omega: f64) -> f64 {
    let a: [f64; 7] = if quarter == Quarter::New {
        [-0.407_20, 0.172_41, 0.016_08, 0.010_39, 0.007_39, -0.005_14, 0.002_08]
    } else {
        [-0.406_14, 0.173_02, 0.016_14, 0.010_43, 0.007_34, -0.005_15, 0.002_09]
    };
    a[0] * sin(mp) + a[1] * e * sin(m) + a[2] * sin(2.0 * mp) + a[3] * sin(2.0 * f)
        + a[4] * e * sin(mp - m)
        + a[5] * e * sin(mp + m)
        + a[6] * e * e * sin(2.0 * m)
        - 0.001_11 * sin(mp - 2.0 * f)
        - 0.000_57 * sin(mp + 2.0 * f)
        + 0.000_56 * e * sin(2.0 * mp + m)
        - 0.000_42 * sin(3.0 * mp)
        + 0.000_42 * e * sin(m + 2.0 * f)
        + 0.000_38 * e * sin(m - 2.0 * f)
        - 0.000_24 * e * sin(2.0 * mp - m)
        - 0.000_17 * sin(omega)
        - 0.000_07 * sin(mp + 2.0 * m)
        + 0.000_04 * sin(2.0 * mp - 2.0 * f)
        + 0.000_04 * sin(3.0 * m)
        + 0.000_03 * sin(mp + m - 2.0 * f)
        + 0.000_03 * sin(2.0 * mp + 2.0 * f)
        - 0.000_03 * sin(mp + m + 2.0 * f)
        + 0.000_03 * sin(mp - m + 2.0 * f)
        - 0.000_02 * sin(mp - m - 2.0 * f)
        - 0.000_02 * sin(3.0 * mp + m)
        + 0.000_02 * sin(4.0 * mp)
}

fn quadrature_terms(e: f64, m: f64, mp: f64, f: f64, omega: f64) -> f64 {
    -0.628_01 * sin(mp) + 0.171_72 * e * sin(m) - 0.011_83 * e * sin(mp + m)
        + 0.008_62 * sin(2.0 * mp)
        + 0.008_04 * sin(2.0 * f)
        + 0.004_54 * e * sin(mp - m)
        + 0.002_04 * e * e * sin(2.0 * m)
        - 0.001_80 * sin(mp - 2.0 * f)
        - 0.000_70 * sin(mp + 2.0 * f)
        - 0.000_40 * sin(3.0 * mp)
        - 0.000_34 * e * sin(2.0 * mp - m)
        + 0.000_32 * e * sin(m + 2.0 * f)
        + 0.000_32 * e * sin(m - 2.0 * f)
        - 0.000_28 * e * e * sin(mp + 2.0 * m)
        + 0.000_27 * e * sin(2.0 * mp + m)
        - 0.000_17 * sin(omega)
        - 0.000_05 * sin(mp - m - 2.0 * f)
        + 0.000_04 * sin(2.0 * mp + 2.0 * f)
        - 0.000_04 * sin(mp + m + 2.0 * f)
        + 0.000_04 * sin(mp - 2.0 * m)
        + 0.000_03 * sin(mp + m - 2.0 * f)
        + 0.000_03 * sin(3.0 * m)
        + 0.000_02 * sin(2.0 * mp - 2.0 * f)
        + 0.000_02 * sin(mp - m + 2.0 * f)
        - 0.000_02 * sin(3.0 * mp + m)
}

fn planetary_terms(k: f64, t2: f64) -> f64 {
    const TERMS: [(f64, f64, f64); 14] = [
        (0.000_325, 299.77, 0.107_408),
        (0.000_165, 251.88, 0.016_321),
        (0.000_164, 251.83, 26.651_886),
        (0.000_126, 349.42, 36.412_478),
        (0.000_110, 84.66, 18.206_239),
        (0.000_062, 141.74, 53.303_771),
        (0.000_060, 207.14, 2.453_732),
        (0.000_056, 154.84, 7.306_860),
        (0.000_047, 34.52, 27.261_239),
        (0.000_042, 207.19, 0.121_824),
        (0.000_040, 291.34, 1.844_379),
        (0.000_037, 161.72, 24.198_154),
        (0.000_035, 239.56, 25.513_099),
        (0.000_023, 331.55, 3.592_518),
    ];
    TERMS
        .iter()
        .enumerate()
        .map(|(i, &(coefficient, base, rate))| {
            // A1 carries a small quadratic term.
            let quadratic = if i == 0 { -0.009_173 * t2 } else { 0.0 };
            coefficient * sin(base + rate * k + quadratic)
        })
        .sum()
}

fn sin(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn eclipse_new_moon_2008() {
        // Annular solar eclipse of 2008-02-07.
        let event = next_quarter(julian::from_utc(utc(2008, 2, 1, 0, 0)));
        assert_eq!(event.quarter, Quarter::New);
        let instant = julian::to_utc(event.jd).unwrap();
        assert!((instant - utc(2008, 2, 7, 3, 44)).num_minutes().abs() <= 2, "{instant}");
    }

    #[test]
    fn eclipse_full_moon_2008() {
        // Total lunar eclipse of 2008-02-21.
        let event = next_quarter(julian::from_utc(utc(2008, 2, 15, 0, 0)));
        assert_eq!(event.quarter, Quarter::Full);
        let instant = julian::to_utc(event.jd).unwrap();
        assert!((instant - utc(2008, 2, 21, 3, 30)).num_minutes().abs() <= 2, "{instant}");
    }

    #[test]
    fn quarters_cycle_in_order() {
        let mut jd = julian::from_utc(utc(2024, 1, 1, 0, 0));
        let mut seen = Vec::new();
        for _ in 0..8 {
            let event = next_quarter(jd);
            seen.push(event.quarter.phase_index());
            jd = event.jd + 0.1;
        }
        let start = seen[0];
        for (i, index) in seen.iter().enumerate() {
            assert_eq!(*index, (start + 2 * i as u8) % 8);
        }
    }

    #[test]
    fn new_moons_of_2024() {
        for d in [date(2024, 3, 10), date(2024, 4, 8), date(2024, 5, 8), date(2024, 6, 6)] {
            assert_eq!(moon_phase(d, chrono_tz::UTC), 0, "{d}");
        }
    }

    #[test]
    fn march_2024_phases() {
        let expected = [
            5, 5, 6, 7, 7, 7, 7, 7, 7, 0, 1, 1, 1, 1, 1, 1, 2, 3, 3, 3, 3, 3, 3, 3, 4, 5, 5, 5,
            5, 5, 5,
        ];
        for (i, want) in expected.iter().enumerate() {
            let d = date(2024, 3, i as u32 + 1);
            assert_eq!(moon_phase(d, chrono_tz::UTC), *want, "{d}");
        }
    }

    #[test]
    fn phase_index_is_bounded() {
        let mut d = date(2023, 1, 1);
        for _ in 0..800 {
            assert!(moon_phase(d, chrono_tz::Europe::Vilnius) <= 7);
            d = d.succ_opt().unwrap();
        }
    }
}
