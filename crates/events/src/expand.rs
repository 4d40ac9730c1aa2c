//! Expansion of event rules into dated occurrences.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::ladder::{LadderRung, MILESTONE_LADDER};
use crate::pattern::RecurrencePattern;
use crate::rule::EventRule;
use crate::template::TitleTemplate;

/// Rendered event texts grouped by date.
///
/// Texts on the same date keep insertion order, so expanding rules in file
/// order keeps the first-declared event first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences {
    by_date: BTreeMap<NaiveDate, Vec<String>>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` to the texts of `date`.
    pub fn push(&mut self, date: NaiveDate, text: String) {
        self.by_date.entry(date).or_default().push(text);
    }

    /// Appends every occurrence of `other`, keeping its per-date order.
    pub fn extend(&mut self, other: Occurrences) {
        for (date, texts) in other.by_date {
            self.by_date.entry(date).or_default().extend(texts);
        }
    }

    /// Texts on `date`, in insertion order.
    pub fn on(&self, date: NaiveDate) -> &[String] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates dates in chronological order with their texts.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.by_date.iter().map(|(d, texts)| (*d, texts.as_slice()))
    }

    /// Total number of occurrences over all dates.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Expands rules over inclusive date windows.
///
/// The milestone ladder is injected so tests and callers can substitute
/// their own; [`Expander::default`] uses [`MILESTONE_LADDER`].
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    ladder: &'a [LadderRung],
}

impl Default for Expander<'static> {
    fn default() -> Self {
        Self {
            ladder: &MILESTONE_LADDER,
        }
    }
}

impl<'a> Expander<'a> {
    pub fn new(ladder: &'a [LadderRung]) -> Self {
        Self { ladder }
    }

    /// Expands every rule over `[window_start, window_end]`, in rule order.
    pub fn expand_all(
        &self,
        rules: &[EventRule],
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Occurrences {
        let mut all = Occurrences::new();
        for rule in rules {
            all.extend(self.expand(rule, window_start, window_end));
        }
        all
    }

    /// Expands one rule. Every returned date `d` satisfies
    /// `window_start <= d <= window_end`.
    pub fn expand(
        &self,
        rule: &EventRule,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Occurrences {
        match rule {
            EventRule::Anniversary {
                title,
                start,
                pattern,
            } => {
                let mut out = Occurrences::new();
                let anchor = start.and_time(NaiveTime::MIN);
                for occurrence in pattern.between(anchor, window_start, window_end) {
                    let age = occurrence.year() - start.year();
                    out.push(occurrence.date(), title.render(age));
                }
                out
            }
            EventRule::Milestone { title, start } => {
                self.expand_milestones(title, *start, window_start, window_end)
            }
            EventRule::Generic { title, pattern } => {
                let mut out = Occurrences::new();
                let anchor = window_start.and_time(NaiveTime::MIN);
                for occurrence in pattern.between(anchor, window_start, window_end) {
                    out.push(occurrence.date(), title.clone());
                }
                out
            }
        }
    }

    fn expand_milestones(
        &self,
        title: &TitleTemplate,
        start: NaiveDate,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> Occurrences {
        let mut out = Occurrences::new();
        let anchor = start.and_time(NaiveTime::MIN);
        // The anchor itself is never a milestone.
        let lower = start
            .succ_opt()
            .map_or(window_start, |next| next.max(window_start));
        for rung in self.ladder {
            for exponent in rung.exponents.clone() {
                let Some(interval) = 10u32.checked_pow(exponent) else {
                    continue;
                };
                let pattern = RecurrencePattern::new(rung.frequency)
                    .with_interval(interval)
                    .with_count(2);
                for occurrence in pattern.between(anchor, lower, window_end) {
                    out.push(occurrence.date(), title.render(rung.label(exponent)));
                }
            }
        }
        out
    }
}
