//! Tropical zodiac signs by calendar date.

use chrono::{Datelike, NaiveDate};

/// A zodiac sign and the day of its month on which it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    pub symbol: char,
    pub name: &'static str,
    /// Day of the month the sign starts on.
    pub start_day: u32,
}

/// Signs indexed by the month they begin in (January first).
pub const ZODIAC: [ZodiacSign; 12] = [
    sign('♒', "Aquarius", 21),
    sign('♓', "Pisces", 20),
    sign('♈', "Aries", 21),
    sign('♉', "Taurus", 21),
    sign('♊', "Gemini", 23),
    sign('♋', "Cancer", 22),
    sign('♌', "Leo", 23),
    sign('♍', "Virgo", 23),
    sign('♎', "Libra", 23),
    sign('♏', "Scorpius", 23),
    sign('♐', "Sagittarius", 23),
    sign('♑', "Capricorn", 22),
];

const fn sign(symbol: char, name: &'static str, start_day: u32) -> ZodiacSign {
    ZodiacSign {
        symbol,
        name,
        start_day,
    }
}

/// The sign in effect on `date`.
pub fn zodiac_sign(date: NaiveDate) -> ZodiacSign {
    let month = date.month0() as usize;
    let current = ZODIAC[month];
    if date.day() >= current.start_day {
        current
    } else {
        ZODIAC[(month + 11) % 12]
    }
}
