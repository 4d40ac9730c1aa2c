//! Line-oriented parser for event definition files.
//!
//! ```text
//! # title ; kind ; kind-specific fields
//! 🎂 Ona {age} ; anniversary ; 1990-05-12 ; FREQ=YEARLY
//! {age} together ; exponential-milestone ; 2015-06-20
//! ♻ Recycling ; generic ; FREQ=WEEKLY;INTERVAL=2;BYDAY=TH
//! ```

use chrono::NaiveDate;

use crate::error::ParseError;
use crate::pattern::RecurrencePattern;
use crate::rule::{EventRule, RuleKind};
use crate::template::TitleTemplate;

const COMMENT_MARKER: char = '#';

/// Parses a whole events file. Rules keep the order of their lines.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; nothing is returned for the
/// lines that did parse.
pub fn parse_rules(source: &str) -> Result<Vec<EventRule>, ParseError> {
    let mut rules = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(rule) = parse_line(index + 1, line)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Parses one line. Blank and comment lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`ParseError`] tagged with `line` when the line is malformed.
pub fn parse_line(line: usize, text: &str) -> Result<Option<EventRule>, ParseError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }

    let fields: Vec<&str> = text.splitn(3, ';').map(str::trim).collect();
    let [title, kind, rest] = fields[..] else {
        return Err(ParseError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let kind: RuleKind = kind.parse().map_err(|()| ParseError::UnknownKind {
        line,
        kind: kind.to_string(),
    })?;

    let rule = match kind {
        RuleKind::Anniversary => {
            let (start, pattern) = rest.split_once(';').ok_or(ParseError::MissingField {
                line,
                field: "recurrence pattern",
            })?;
            EventRule::Anniversary {
                title: parse_template(line, title)?,
                start: parse_date(line, start)?,
                pattern: parse_pattern(line, pattern)?,
            }
        }
        RuleKind::Milestone => EventRule::Milestone {
            title: parse_template(line, title)?,
            start: parse_date(line, rest)?,
        },
        RuleKind::Generic => EventRule::Generic {
            title: title.to_string(),
            pattern: parse_pattern(line, rest)?,
        },
    };
    Ok(Some(rule))
}

fn parse_template(line: usize, text: &str) -> Result<TitleTemplate, ParseError> {
    TitleTemplate::parse(text).map_err(|source| ParseError::InvalidTemplate { line, source })
}

fn parse_date(line: usize, text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate {
        line,
        value: text.to_string(),
    })
}

fn parse_pattern(line: usize, text: &str) -> Result<RecurrencePattern, ParseError> {
    text.parse()
        .map_err(|source| ParseError::InvalidPattern { line, source })
}
