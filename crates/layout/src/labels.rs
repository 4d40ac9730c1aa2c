//! Name and glyph tables printed on the page.

/// Every string the layout prints that is not a number or an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    /// Month names, January first.
    pub months: [String; 12],
    /// Two-letter weekday headers of the month overview, Monday first.
    pub weekdays_short: [String; 7],
    /// Full weekday names above the detail grid, Monday first.
    pub weekdays: [String; 7],
    /// Moon glyphs indexed by phase, 0 being new moon.
    pub moon: [String; 8],
    pub sunrise: String,
    pub sunset: String,
    pub daylight: String,
}

impl Labels {
    /// Name of `month` (1-based).
    pub fn month(&self, month: u32) -> &str {
        self.months
            .get(month.wrapping_sub(1) as usize)
            .map_or("", String::as_str)
    }

    /// Glyph of a moon phase index; indices wrap modulo 8.
    pub fn moon_glyph(&self, phase: u8) -> &str {
        &self.moon[usize::from(phase % 8)]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
            weekdays_short: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"].map(String::from),
            weekdays: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]
            .map(String::from),
            moon: ["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"].map(String::from),
            sunrise: "↑".into(),
            sunset: "↓".into(),
            daylight: "☀".into(),
        }
    }
}
