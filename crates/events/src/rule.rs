//! Compiled event rules.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::pattern::RecurrencePattern;
use crate::template::TitleTemplate;

/// The kind token of an event definition line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Anniversary,
    Milestone,
    Generic,
}

impl FromStr for RuleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anniversary" | "bday" => Ok(Self::Anniversary),
            "exponential-milestone" | "powersof10" => Ok(Self::Milestone),
            "generic" | "event" => Ok(Self::Generic),
            _ => Err(()),
        }
    }
}

/// One recurring event, as declared on one line of the events file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRule {
    /// Repeats by `pattern` from `start`; `{age}` is the number of years
    /// since `start`.
    Anniversary {
        title: TitleTemplate,
        start: NaiveDate,
        pattern: RecurrencePattern,
    },
    /// Marks `10^p` months, weeks, days, hours, minutes and seconds after
    /// `start`; `{age}` is the milestone label.
    Milestone {
        title: TitleTemplate,
        start: NaiveDate,
    },
    /// Repeats by `pattern` anchored at the start of each expansion window.
    Generic {
        title: String,
        pattern: RecurrencePattern,
    },
}

impl EventRule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Anniversary { .. } => RuleKind::Anniversary,
            Self::Milestone { .. } => RuleKind::Milestone,
            Self::Generic { .. } => RuleKind::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens_and_aliases() {
        assert_eq!("anniversary".parse::<RuleKind>(), Ok(RuleKind::Anniversary));
        assert_eq!("bday".parse::<RuleKind>(), Ok(RuleKind::Anniversary));
        assert_eq!("exponential-milestone".parse::<RuleKind>(), Ok(RuleKind::Milestone));
        assert_eq!("powersof10".parse::<RuleKind>(), Ok(RuleKind::Milestone));
        assert_eq!(" Generic ".parse::<RuleKind>(), Ok(RuleKind::Generic));
        assert_eq!("event".parse::<RuleKind>(), Ok(RuleKind::Generic));
        assert_eq!("holiday".parse::<RuleKind>(), Err(()));
    }
}
