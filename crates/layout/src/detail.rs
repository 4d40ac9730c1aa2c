//! Four-week detail grid: one cell per day with sun, moon, zodiac and
//! event lines.

use almanac_astro::{Annotator, DayAnnotation};
use almanac_events::Occurrences;
use chrono::{Datelike, NaiveDate};

use crate::element::{Anchor, Element};
use crate::error::LayoutError;
use crate::format::{duration_hh_mm, time_hh_mm};
use crate::labels::Labels;

const WEEKDAY_FONT_SIZE: f64 = 4.0;
const DAY_NUMBER_FONT_SIZE: f64 = 10.0;
const DETAIL_FONT_SIZE: f64 = 3.5;

/// Vertical distance between stacked event lines.
const EVENT_LINE_HEIGHT: f64 = 4.0;

pub(crate) struct DetailGrid<'a> {
    pub left: f64,
    pub top: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub labels: &'a Labels,
    pub split_icons: bool,
}

impl DetailGrid<'_> {
    pub fn emit(
        &self,
        days: &[NaiveDate],
        annotator: &Annotator,
        events: &Occurrences,
        out: &mut Vec<Element>,
    ) -> Result<(), LayoutError> {
        for (i, name) in self.labels.weekdays.iter().enumerate() {
            out.push(Element::text(
                self.left + i as f64 * self.cell_width + 1.0,
                self.top - 1.0,
                name.as_str(),
                WEEKDAY_FONT_SIZE,
            ));
        }

        for (i, &date) in days.iter().enumerate() {
            let (week, weekday) = (i / 7, i % 7);
            let x = self.left + weekday as f64 * self.cell_width + 1.0;
            let y = self.top + week as f64 * self.cell_height + 1.0;
            let day = annotator.annotate(date)?;
            self.emit_cell(x, y, &day, events.on(date), out);
        }
        Ok(())
    }

    fn emit_cell(&self, x: f64, y: f64, day: &DayAnnotation, events: &[String], out: &mut Vec<Element>) {
        let labels = self.labels;
        out.push(Element::rect(x, y, self.cell_width - 1.0, self.cell_height - 1.0));
        out.push(Element::anchored_text(
            x + 9.0,
            y + 8.0,
            day.date.day().to_string(),
            DAY_NUMBER_FONT_SIZE,
            Anchor::End,
        ));

        let small = |dx: f64, dy: f64, content: String| {
            Element::text(x + dx, y + dy, content, DETAIL_FONT_SIZE)
        };
        out.push(small(10.0, 3.5, format!("{}{}", labels.sunrise, time_hh_mm(day.sunrise))));
        out.push(small(10.0, 8.0, format!("{}{}", labels.sunset, time_hh_mm(day.sunset))));
        out.push(small(
            22.0,
            3.5,
            format!("{} {}", labels.daylight, duration_hh_mm(day.daylight)),
        ));
        out.push(small(
            21.0,
            8.0,
            format!("{} {}", labels.moon_glyph(day.moon_phase), duration_hh_mm(day.night)),
        ));
        out.push(small(34.0, 3.5, day.zodiac.symbol.to_string()));

        for (k, event) in events.iter().enumerate() {
            let line_y = y + 13.0 + k as f64 * EVENT_LINE_HEIGHT;
            let (icon, text) = if self.split_icons {
                split_icon(event)
            } else {
                (None, event.as_str())
            };
            if let Some(icon) = icon {
                out.push(Element::anchored_text(
                    x + 3.0,
                    line_y,
                    icon,
                    DETAIL_FONT_SIZE,
                    Anchor::Middle,
                ));
            }
            out.push(Element::text(x + 6.0, line_y, text, DETAIL_FONT_SIZE));
        }
    }
}

/// Splits `"🎂 Ona 34"` into `(Some("🎂"), "Ona 34")`.
///
/// Only a single-character prefix followed by a space counts as an icon.
pub fn split_icon(event: &str) -> (Option<&str>, &str) {
    let mut chars = event.char_indices();
    let Some((_, first)) = chars.next() else {
        return (None, event);
    };
    match chars.next() {
        Some((space_at, ' ')) => {
            let rest = event[space_at..].trim_start();
            if rest.is_empty() {
                (None, event)
            } else {
                (Some(&event[..first.len_utf8()]), rest)
            }
        }
        _ => (None, event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_with_text() {
        assert_eq!(split_icon("🎂 Ona 34"), (Some("🎂"), "Ona 34"));
        assert_eq!(split_icon("x  spaced"), (Some("x"), "spaced"));
    }

    #[test]
    fn no_icon() {
        assert_eq!(split_icon("Ona 34"), (None, "Ona 34"));
        assert_eq!(split_icon(""), (None, ""));
        assert_eq!(split_icon("x"), (None, "x"));
        assert_eq!(split_icon("x "), (None, "x "));
    }
}
