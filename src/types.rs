//! Result types produced by an evaluation.

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a single password rule.
///
/// Variants are declared in canonical order; errors are always reported
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rule {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
    /// Password appears in the configured blacklist.
    Common,
}

impl Rule {
    /// Every rule, in canonical order.
    pub const ALL: [Rule; 6] = [
        Rule::Length,
        Rule::Lowercase,
        Rule::Uppercase,
        Rule::Digit,
        Rule::Special,
        Rule::Common,
    ];

    /// Stable identifier, suitable for i18n keys or form error codes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Lowercase => "lowercase",
            Rule::Uppercase => "uppercase",
            Rule::Digit => "digit",
            Rule::Special => "special",
            Rule::Common => "common",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Score(u8);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Score must be at most 100, got {0}")]
pub struct ScoreOutOfRange(pub u8);

impl Score {
    pub const MAX: Score = Score(100);

    /// Builds a score, clamping anything above 100.
    pub fn new(value: u8) -> Self {
        Score(value.min(100))
    }

    /// Score for `satisfied` out of `enabled` rules, rounded half up.
    ///
    /// Zero enabled rules yields zero.
    pub fn from_ratio(satisfied: usize, enabled: usize) -> Self {
        if enabled == 0 {
            return Score(0);
        }
        let satisfied = satisfied.min(enabled);
        let rounded = (satisfied * 100 + enabled / 2) / enabled;
        Score(rounded as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn strength(self) -> Strength {
        Strength::from(self)
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ScoreOutOfRange(value));
        }
        Ok(Score(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse strength tier derived from a [`Score`].
///
/// | score    | tier     |
/// |----------|----------|
/// | 0..=39   | `Low`    |
/// | 40..=74  | `Medium` |
/// | 75..=100 | `High`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Strength {
    Low,
    Medium,
    High,
}

impl Strength {
    /// Lowest score classified as `Medium`.
    pub const MEDIUM_THRESHOLD: u8 = 40;
    /// Lowest score classified as `High`.
    pub const HIGH_THRESHOLD: u8 = 75;
}

impl From<Score> for Strength {
    fn from(score: Score) -> Self {
        match score.value() {
            s if s >= Strength::HIGH_THRESHOLD => Strength::High,
            s if s >= Strength::MEDIUM_THRESHOLD => Strength::Medium,
            _ => Strength::Low,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Low => "LOW",
            Strength::Medium => "MEDIUM",
            Strength::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Verdict of one evaluation.
///
/// Only produced by evaluation, so it serializes but never deserializes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Unmet rules, in canonical order.
    pub errors: Vec<Rule>,
    pub strength: Strength,
    pub score: Score,
}

impl ValidationResult {
    pub fn has_error(&self, rule: Rule) -> bool {
        self.errors.contains(&rule)
    }
}

/// One line of a requirement checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Requirement {
    pub description: String,
    pub satisfied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_canonical() {
        let mut shuffled = vec![Rule::Special, Rule::Length, Rule::Common, Rule::Digit];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Rule::Length, Rule::Digit, Rule::Special, Rule::Common]
        );
        assert!(Rule::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_score_from_ratio_rounding() {
        assert_eq!(Score::from_ratio(0, 5).value(), 0);
        assert_eq!(Score::from_ratio(1, 3).value(), 33);
        assert_eq!(Score::from_ratio(2, 3).value(), 67);
        assert_eq!(Score::from_ratio(1, 2).value(), 50);
        assert_eq!(Score::from_ratio(5, 6).value(), 83);
        assert_eq!(Score::from_ratio(5, 5).value(), 100);
    }

    #[test]
    fn test_score_from_ratio_degenerate() {
        assert_eq!(Score::from_ratio(0, 0).value(), 0);
        assert_eq!(Score::from_ratio(7, 5), Score::MAX);
    }

    #[test]
    fn test_score_new_clamps() {
        assert_eq!(Score::new(250), Score::MAX);
        assert_eq!(Score::new(42).value(), 42);
    }

    #[test]
    fn test_score_try_from_rejects_out_of_range() {
        assert_eq!(Score::try_from(100), Ok(Score::MAX));
        assert_eq!(Score::try_from(0).map(Score::value), Ok(0));
        assert_eq!(Score::try_from(101), Err(ScoreOutOfRange(101)));
        assert_eq!(u8::from(Score::new(55)), 55);
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Score::new(0).strength(), Strength::Low);
        assert_eq!(Score::new(39).strength(), Strength::Low);
        assert_eq!(Score::new(40).strength(), Strength::Medium);
        assert_eq!(Score::new(74).strength(), Strength::Medium);
        assert_eq!(Score::new(75).strength(), Strength::High);
        assert_eq!(Score::new(100).strength(), Strength::High);
    }

    #[test]
    fn test_strength_partition_is_monotonic() {
        let tiers: Vec<Strength> = (0..=100).map(|s| Score::new(s).strength()).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::Special.to_string(), "special");
        assert_eq!(Strength::Medium.to_string(), "MEDIUM");
        assert_eq!(Score::new(60).to_string(), "60");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serializes_with_identifiers() {
        let result = ValidationResult {
            is_valid: false,
            errors: vec![Rule::Uppercase, Rule::Special],
            strength: Strength::Medium,
            score: Score::new(60),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["errors"], serde_json::json!(["uppercase", "special"]));
        assert_eq!(json["strength"], "MEDIUM");
        assert_eq!(json["score"], 60);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_score_deserialize_enforces_range() {
        assert_eq!(serde_json::from_str::<Score>("75").unwrap(), Score::new(75));
        assert!(serde_json::from_str::<Score>("250").is_err());
        assert!(serde_json::from_str::<Score>("101").is_err());
    }
}
