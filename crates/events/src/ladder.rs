//! Power-of-ten milestone ladder.

use std::ops::RangeInclusive;

use crate::pattern::Frequency;

/// Exponents above this are labelled `10^p` instead of the full number.
pub const SHORT_LABEL_THRESHOLD: u32 = 3;

/// One rung of the milestone ladder: a unit and the powers of ten of that
/// unit that are worth celebrating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderRung {
    /// Period the interval is measured in.
    pub frequency: Frequency,
    /// Unit label appended to the rendered interval.
    pub unit: &'static str,
    /// Exponents `p` giving intervals of `10^p` units.
    pub exponents: RangeInclusive<u32>,
}

impl LadderRung {
    /// Renders the milestone label for exponent `p`.
    ///
    /// ```
    /// use almanac_events::MILESTONE_LADDER;
    ///
    /// let days = &MILESTONE_LADDER[2];
    /// assert_eq!(days.label(2), "100 d.");
    /// assert_eq!(days.label(4), "10^4 d.");
    /// ```
    pub fn label(&self, exponent: u32) -> String {
        if exponent > SHORT_LABEL_THRESHOLD {
            format!("10^{exponent} {}", self.unit)
        } else {
            format!("{} {}", 10u64.pow(exponent), self.unit)
        }
    }
}

/// The default ladder, from months down to seconds.
pub const MILESTONE_LADDER: [LadderRung; 6] = [
    LadderRung {
        frequency: Frequency::Monthly,
        unit: "mėn.",
        exponents: 2..=3,
    },
    LadderRung {
        frequency: Frequency::Weekly,
        unit: "sav.",
        exponents: 2..=3,
    },
    LadderRung {
        frequency: Frequency::Daily,
        unit: "d.",
        exponents: 2..=4,
    },
    LadderRung {
        frequency: Frequency::Hourly,
        unit: "val.",
        exponents: 4..=5,
    },
    LadderRung {
        frequency: Frequency::Minutely,
        unit: "min.",
        exponents: 6..=7,
    },
    LadderRung {
        frequency: Frequency::Secondly,
        unit: "sek.",
        exponents: 8..=9,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_switch_at_threshold() {
        let weeks = &MILESTONE_LADDER[1];
        assert_eq!(weeks.label(3), "1000 sav.");
        let seconds = &MILESTONE_LADDER[5];
        assert_eq!(seconds.label(9), "10^9 sek.");
    }

    #[test]
    fn intervals_fit_in_u32() {
        for rung in &MILESTONE_LADDER {
            for p in rung.exponents.clone() {
                assert!(10u32.checked_pow(p).is_some(), "{} 10^{p}", rung.unit);
            }
        }
    }

    #[test]
    fn ladder_runs_from_months_to_seconds() {
        let order: Vec<Frequency> = MILESTONE_LADDER.iter().map(|r| r.frequency).collect();
        assert_eq!(
            order,
            vec![
                Frequency::Monthly,
                Frequency::Weekly,
                Frequency::Daily,
                Frequency::Hourly,
                Frequency::Minutely,
                Frequency::Secondly,
            ]
        );
    }
}
