//! # almanac-events
//!
//! Recurring event definitions and their expansion into dated occurrences.
//!
//! ## Architecture
//!
//! ```text
//! events file ──parse_rules()──▶ Vec<EventRule>
//!                                   │
//!            Expander::expand_all(rules, window_start, window_end)
//!                                   │
//!                                   ▼
//!                    Occurrences: date ─▶ [text, text, ...]
//! ```
//!
//! Three kinds of rule exist:
//!
//! | Kind | Fields | Expansion |
//! |------|--------|-----------|
//! | `anniversary` (`bday`) | start date, pattern | pattern anchored at the start date, `{age}` = years since start |
//! | `exponential-milestone` (`powersof10`) | start date | `10^p` units after the start for each ladder rung, `{age}` = label |
//! | `generic` (`event`) | pattern | pattern anchored at the window start, literal title |
//!
//! ## Quick Start
//!
//! ```
//! use almanac_events::{Expander, parse_rules};
//! use chrono::NaiveDate;
//!
//! let rules = parse_rules("Ona {age} ; anniversary ; 1990-03-05 ; FREQ=YEARLY").unwrap();
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//! let occurrences = Expander::default().expand_all(&rules, start, end);
//! assert_eq!(occurrences.on(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()), ["Ona 34"]);
//! ```

pub mod error;
pub mod expand;
pub mod ladder;
pub mod parser;
pub mod pattern;
pub mod rule;
pub mod template;

pub use error::{ParseError, PatternError, TemplateError};
pub use expand::{Expander, Occurrences};
pub use ladder::{LadderRung, MILESTONE_LADDER, SHORT_LABEL_THRESHOLD};
pub use parser::{parse_line, parse_rules};
pub use pattern::{Frequency, RecurrencePattern, WeekdaySpec};
pub use rule::{EventRule, RuleKind};
pub use template::TitleTemplate;
