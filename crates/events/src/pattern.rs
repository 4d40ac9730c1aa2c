//! Recurrence patterns: a subset of the iCalendar RRULE language.
//!
//! A pattern is evaluated against an *anchor* instant: periods start at the
//! anchor's year, month, week, day or instant and advance by `INTERVAL`
//! units. Parts that are left out default from the anchor the way iCalendar
//! does it (a bare `FREQ=YEARLY` repeats on the anchor's month and day).

use std::fmt;
use std::str::FromStr;

use almanac_calendar::{days_in_month, shift_month, week_start};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use crate::error::PatternError;

/// How often a pattern repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Minutely,
    Secondly,
}

impl Frequency {
    /// Returns the RRULE token for this frequency.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
            Self::Hourly => "HOURLY",
            Self::Minutely => "MINUTELY",
            Self::Secondly => "SECONDLY",
        }
    }

    /// Length of one period in seconds, for sub-daily frequencies.
    fn seconds(self) -> Option<i64> {
        match self {
            Self::Hourly => Some(3600),
            Self::Minutely => Some(60),
            Self::Secondly => Some(1),
            _ => None,
        }
    }
}

impl FromStr for Frequency {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YEARLY" => Ok(Self::Yearly),
            "MONTHLY" => Ok(Self::Monthly),
            "WEEKLY" => Ok(Self::Weekly),
            "DAILY" => Ok(Self::Daily),
            "HOURLY" => Ok(Self::Hourly),
            "MINUTELY" => Ok(Self::Minutely),
            "SECONDLY" => Ok(Self::Secondly),
            _ => Err(PatternError::UnknownFrequency {
                value: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `BYDAY` entry: a weekday, optionally restricted to its n-th (or n-th
/// from last, when negative) occurrence within the month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdaySpec {
    pub weekday: Weekday,
    pub ordinal: Option<i32>,
}

impl WeekdaySpec {
    /// Every occurrence of `weekday`.
    pub fn every(weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: None,
        }
    }

    /// Only the `ordinal`-th occurrence of `weekday`.
    pub fn nth(ordinal: i32, weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: Some(ordinal),
        }
    }
}

impl FromStr for WeekdaySpec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PatternError::InvalidValue {
            key: "BYDAY",
            value: s.to_string(),
        };
        let s = s.trim();
        if !s.is_ascii() || s.len() < 2 {
            return Err(invalid());
        }
        let (number, day) = s.split_at(s.len() - 2);
        let weekday = match day.to_ascii_uppercase().as_str() {
            "MO" => Weekday::Mon,
            "TU" => Weekday::Tue,
            "WE" => Weekday::Wed,
            "TH" => Weekday::Thu,
            "FR" => Weekday::Fri,
            "SA" => Weekday::Sat,
            "SU" => Weekday::Sun,
            _ => return Err(invalid()),
        };
        if number.is_empty() {
            return Ok(Self::every(weekday));
        }
        let ordinal: i32 = number.parse().map_err(|_| invalid())?;
        if ordinal == 0 || ordinal.abs() > 53 {
            return Err(invalid());
        }
        Ok(Self::nth(ordinal, weekday))
    }
}

impl fmt::Display for WeekdaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        let day = match self.weekday {
            Weekday::Mon => "MO",
            Weekday::Tue => "TU",
            Weekday::Wed => "WE",
            Weekday::Thu => "TH",
            Weekday::Fri => "FR",
            Weekday::Sat => "SA",
            Weekday::Sun => "SU",
        };
        f.write_str(day)
    }
}

/// A compiled recurrence pattern.
///
/// # Example
///
/// ```
/// use almanac_events::{Frequency, RecurrencePattern};
/// use chrono::NaiveDate;
///
/// let pattern: RecurrencePattern = "FREQ=WEEKLY;INTERVAL=2".parse().unwrap();
/// assert_eq!(pattern.frequency(), Frequency::Weekly);
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let from = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(pattern.between(anchor, from, to).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePattern {
    frequency: Frequency,
    interval: u32,
    count: Option<u32>,
    until: Option<NaiveDateTime>,
    by_month: Vec<u32>,
    by_month_day: Vec<i32>,
    by_day: Vec<WeekdaySpec>,
}

/// Whether a `BYDAY` ordinal counts within the month or within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrdinalScope {
    Month,
    Year,
}

/// `BY*` filters after anchor defaults have been applied.
struct Filters {
    months: Vec<u32>,
    month_days: Vec<i32>,
    days: Vec<WeekdaySpec>,
    scope: OrdinalScope,
}

impl Filters {
    fn matches(&self, date: NaiveDate) -> bool {
        if !self.months.is_empty() && !self.months.contains(&date.month()) {
            return false;
        }
        let month_len = days_in_month(date.year(), date.month()).unwrap_or(31) as i32;
        let day = date.day() as i32;
        if !self.month_days.is_empty()
            && !self
                .month_days
                .iter()
                .any(|&md| if md > 0 { md == day } else { month_len + md + 1 == day })
        {
            return false;
        }
        if !self.days.is_empty() {
            let (position, length) = match self.scope {
                OrdinalScope::Month => (day, month_len),
                OrdinalScope::Year => (date.ordinal() as i32, year_length(date.year())),
            };
            let forward = (position - 1) / 7 + 1;
            let backward = (length - position) / 7 + 1;
            return self.days.iter().any(|spec| {
                spec.weekday == date.weekday()
                    && match spec.ordinal {
                        None => true,
                        Some(n) if n > 0 => forward == n,
                        Some(n) => backward == -n,
                    }
            });
        }
        true
    }
}

fn year_length(year: i32) -> i32 {
    NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |d| d.ordinal() as i32)
}

/// The candidate instants of one period.
struct Period {
    start: NaiveDate,
    candidates: Vec<NaiveDateTime>,
}

impl RecurrencePattern {
    /// Creates a pattern repeating every period with no end.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            count: None,
            until: None,
            by_month: Vec::new(),
            by_month_day: Vec::new(),
            by_day: Vec::new(),
        }
    }

    /// Sets the number of periods between repetitions (at least 1).
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Limits the pattern to `count` occurrences counted from the anchor.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self.until = None;
        self
    }

    /// Ends the pattern at `until` (inclusive).
    pub fn with_until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self.count = None;
        self
    }

    /// Restricts occurrences to the given months (1..=12).
    pub fn with_by_month(mut self, months: Vec<u32>) -> Self {
        self.by_month = months;
        self
    }

    /// Restricts occurrences to the given days of the month; negative values
    /// count back from the last day.
    pub fn with_by_month_day(mut self, days: Vec<i32>) -> Self {
        self.by_month_day = days;
        self
    }

    /// Restricts occurrences to the given weekdays.
    pub fn with_by_day(mut self, days: Vec<WeekdaySpec>) -> Self {
        self.by_day = days;
        self
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn until(&self) -> Option<NaiveDateTime> {
        self.until
    }

    /// Returns every occurrence whose date lies in `[from, to]`, in
    /// chronological order, for a pattern anchored at `anchor`.
    ///
    /// The anchor is the first candidate instant; `COUNT` counts occurrences
    /// from the anchor even when they fall before `from`.
    pub fn between(
        &self,
        anchor: NaiveDateTime,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Vec<NaiveDateTime> {
        let mut out = Vec::new();
        if from > to {
            return out;
        }
        let filters = self.filters(anchor);
        let mut emitted: u32 = 0;
        let mut k = if self.count.is_none() {
            self.first_relevant_period(anchor, from)
        } else {
            0
        };

        while let Some(period) = self.period(anchor, k, &filters) {
            if period.start > to {
                break;
            }
            // Sub-daily periods on a filtered-out date cannot match until the
            // date changes.
            let next = if period.candidates.is_empty() {
                self.first_period_after(anchor, period.start)
            } else {
                None
            };
            for occurrence in period.candidates {
                if occurrence < anchor {
                    continue;
                }
                if self.until.is_some_and(|until| occurrence > until) {
                    return out;
                }
                if self.count.is_some_and(|count| emitted >= count) {
                    return out;
                }
                emitted += 1;
                let date = occurrence.date();
                if date > to {
                    return out;
                }
                if date >= from {
                    out.push(occurrence);
                }
            }
            k = next.map_or(k + 1, |next| next.max(k + 1));
        }
        out
    }

    /// Applies iCalendar's anchor defaults to the `BY*` parts.
    fn filters(&self, anchor: NaiveDateTime) -> Filters {
        let mut months = self.by_month.clone();
        let mut month_days = self.by_month_day.clone();
        let mut days = self.by_day.clone();
        if month_days.is_empty() && days.is_empty() {
            match self.frequency {
                Frequency::Yearly => {
                    if months.is_empty() {
                        months.push(anchor.month());
                    }
                    month_days.push(anchor.day() as i32);
                }
                Frequency::Monthly => month_days.push(anchor.day() as i32),
                Frequency::Weekly => days.push(WeekdaySpec::every(anchor.weekday())),
                _ => {}
            }
        }
        let scope = if self.frequency == Frequency::Yearly && self.by_month.is_empty() {
            OrdinalScope::Year
        } else {
            OrdinalScope::Month
        };
        Filters {
            months,
            month_days,
            days,
            scope,
        }
    }

    /// Index of the earliest period that can still reach `from`.
    fn first_relevant_period(&self, anchor: NaiveDateTime, from: NaiveDate) -> i64 {
        let interval = i64::from(self.interval);
        let elapsed = match self.frequency {
            Frequency::Yearly => i64::from(from.year() - anchor.year()),
            Frequency::Monthly => {
                i64::from(from.year() - anchor.year()) * 12 + i64::from(from.month())
                    - i64::from(anchor.month())
            }
            Frequency::Weekly => (week_start(from) - week_start(anchor.date())).num_days() / 7,
            Frequency::Daily => (from - anchor.date()).num_days(),
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                let unit = self.frequency.seconds().unwrap_or(1);
                (from.and_time(NaiveTime::MIN) - anchor).num_seconds() / unit
            }
        };
        elapsed.div_euclid(interval).max(0)
    }

    /// Index of the first sub-daily period falling after `date`, or `None`
    /// for daily and longer frequencies.
    fn first_period_after(&self, anchor: NaiveDateTime, date: NaiveDate) -> Option<i64> {
        let span = self
            .frequency
            .seconds()?
            .checked_mul(i64::from(self.interval))?;
        let next_midnight = date.succ_opt()?.and_time(NaiveTime::MIN);
        let elapsed = (next_midnight - anchor).num_seconds();
        let periods = elapsed.div_euclid(span);
        Some(if elapsed.rem_euclid(span) == 0 {
            periods
        } else {
            periods + 1
        })
    }

    /// Builds period `k`, or `None` once the calendar range is exhausted.
    fn period(&self, anchor: NaiveDateTime, k: i64, filters: &Filters) -> Option<Period> {
        let step = k.checked_mul(i64::from(self.interval))?;
        let days: Vec<NaiveDate> = match self.frequency {
            Frequency::Yearly => {
                let year = i32::try_from(i64::from(anchor.year()).checked_add(step)?).ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)?
                    .iter_days()
                    .take_while(|d| d.year() == year)
                    .collect()
            }
            Frequency::Monthly => {
                let (year, month) = shift_month(anchor.year(), anchor.month(), step);
                NaiveDate::from_ymd_opt(year, month, 1)?
                    .iter_days()
                    .take_while(|d| d.month() == month)
                    .collect()
            }
            Frequency::Weekly => {
                let offset = u64::try_from(step.checked_mul(7)?).ok()?;
                let monday = week_start(anchor.date()).checked_add_days(Days::new(offset))?;
                monday.iter_days().take(7).collect()
            }
            Frequency::Daily => {
                let offset = u64::try_from(step).ok()?;
                vec![anchor.date().checked_add_days(Days::new(offset))?]
            }
            Frequency::Hourly | Frequency::Minutely | Frequency::Secondly => {
                let unit = self.frequency.seconds()?;
                let delta = TimeDelta::try_seconds(step.checked_mul(unit)?)?;
                let instant = anchor.checked_add_signed(delta)?;
                let candidates = if filters.matches(instant.date()) {
                    vec![instant]
                } else {
                    Vec::new()
                };
                return Some(Period {
                    start: instant.date(),
                    candidates,
                });
            }
        };

        let start = *days.first()?;
        let candidates = days
            .into_iter()
            .filter(|d| filters.matches(*d))
            .map(|d| d.and_time(anchor.time()))
            .collect();
        Some(Period { start, candidates })
    }

    fn validate(&self) -> Result<(), PatternError> {
        if let Some(&month) = self.by_month.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(PatternError::InvalidValue {
                key: "BYMONTH",
                value: month.to_string(),
            });
        }
        if let Some(&day) = self
            .by_month_day
            .iter()
            .find(|d| **d == 0 || d.abs() > 31)
        {
            return Err(PatternError::InvalidValue {
                key: "BYMONTHDAY",
                value: day.to_string(),
            });
        }
        let ordinals_allowed = matches!(self.frequency, Frequency::Yearly | Frequency::Monthly);
        if let Some(spec) = self
            .by_day
            .iter()
            .find(|spec| spec.ordinal.is_some() && !ordinals_allowed)
        {
            return Err(PatternError::OrdinalNotAllowed {
                value: spec.to_string(),
            });
        }
        Ok(())
    }
}

/// Parses `UNTIL` in its `YYYYMMDD` or `YYYYMMDDTHHMMSS[Z]` forms. A bare
/// date covers the whole day.
fn parse_until(value: &str) -> Result<NaiveDateTime, PatternError> {
    let invalid = || PatternError::InvalidValue {
        key: "UNTIL",
        value: value.to_string(),
    };
    let trimmed = value.trim().trim_end_matches(['Z', 'z']);
    if trimmed.len() == 8 {
        let date = NaiveDate::parse_from_str(trimmed, "%Y%m%d").map_err(|_| invalid())?;
        return date.and_hms_opt(23, 59, 59).ok_or_else(invalid);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y%m%dT%H%M%S").map_err(|_| invalid())
}

fn parse_list<T: FromStr>(key: &'static str, value: &str) -> Result<Vec<T>, PatternError> {
    value
        .split(',')
        .map(|item| {
            item.trim().parse().map_err(|_| PatternError::InvalidValue {
                key,
                value: item.trim().to_string(),
            })
        })
        .collect()
}

fn parse_positive(key: &'static str, value: &str) -> Result<u32, PatternError> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(PatternError::InvalidValue {
            key,
            value: value.trim().to_string(),
        }),
    }
}

impl FromStr for RecurrencePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut text = s.trim();
        if text.get(..6).is_some_and(|p| p.eq_ignore_ascii_case("RRULE:")) {
            text = &text[6..];
        }
        if text.trim().is_empty() {
            return Err(PatternError::Empty);
        }

        let mut frequency = None;
        let mut interval = None;
        let mut count = None;
        let mut until = None;
        let mut by_month = None;
        let mut by_month_day = None;
        let mut by_day: Option<Vec<WeekdaySpec>> = None;

        for part in text.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=').ok_or_else(|| PatternError::MalformedPart {
                part: part.to_string(),
            })?;
            let key = key.trim().to_ascii_uppercase();
            let duplicate = match key.as_str() {
                "FREQ" => frequency.replace(value.parse::<Frequency>()?).is_some(),
                "INTERVAL" => interval
                    .replace(parse_positive("INTERVAL", value)?)
                    .is_some(),
                "COUNT" => count.replace(parse_positive("COUNT", value)?).is_some(),
                "UNTIL" => until.replace(parse_until(value)?).is_some(),
                "BYMONTH" => by_month
                    .replace(parse_list::<u32>("BYMONTH", value)?)
                    .is_some(),
                "BYMONTHDAY" => by_month_day
                    .replace(parse_list::<i32>("BYMONTHDAY", value)?)
                    .is_some(),
                "BYDAY" => by_day
                    .replace(parse_list::<WeekdaySpec>("BYDAY", value)?)
                    .is_some(),
                // Weeks always start on Monday.
                "WKST" if value.trim().eq_ignore_ascii_case("MO") => false,
                _ => return Err(PatternError::UnknownKey { key }),
            };
            if duplicate {
                return Err(PatternError::DuplicateKey { key });
            }
        }

        let frequency = frequency.ok_or(PatternError::MissingFrequency)?;
        if count.is_some() && until.is_some() {
            return Err(PatternError::CountWithUntil);
        }
        let pattern = Self {
            frequency,
            interval: interval.unwrap_or(1),
            count,
            until,
            by_month: by_month.unwrap_or_default(),
            by_month_day: by_month_day.unwrap_or_default(),
            by_day: by_day.unwrap_or_default(),
        };
        pattern.validate()?;
        Ok(pattern)
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.frequency)?;
        if self.interval != 1 {
            write!(f, ";INTERVAL={}", self.interval)?;
        }
        if let Some(count) = self.count {
            write!(f, ";COUNT={count}")?;
        }
        if let Some(until) = self.until {
            write!(f, ";UNTIL={}", until.format("%Y%m%dT%H%M%S"))?;
        }
        let join = |items: Vec<String>| items.join(",");
        if !self.by_month.is_empty() {
            let items = self.by_month.iter().map(ToString::to_string).collect();
            write!(f, ";BYMONTH={}", join(items))?;
        }
        if !self.by_month_day.is_empty() {
            let items = self.by_month_day.iter().map(ToString::to_string).collect();
            write!(f, ";BYMONTHDAY={}", join(items))?;
        }
        if !self.by_day.is_empty() {
            let items = self.by_day.iter().map(ToString::to_string).collect();
            write!(f, ";BYDAY={}", join(items))?;
        }
        Ok(())
    }
}
