//! `HH:MM` formatting of times and durations.

use chrono::{NaiveTime, TimeDelta, Timelike};

pub fn time_hh_mm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Formats a duration as whole hours and minutes, truncating seconds.
/// Negative durations print as zero.
pub fn duration_hh_mm(duration: TimeDelta) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
