//! Bounded 1-10 scores used by the state and edge ratings.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rating in the closed range 1-10.
///
/// Construction is the only place the range is checked, so a `Score`
/// held anywhere in the engine is always valid. Deserialization goes
/// through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

/// Raised when a raw number falls outside 1-10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("score {value} is outside the accepted range {}-{}", Score::MIN, Score::MAX)]
pub struct ScoreOutOfRange {
    /// The rejected input
    pub value: i64,
}

impl Score {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 10;

    /// Validate a raw number supplied by the host.
    pub fn new(value: i64) -> Result<Self, ScoreOutOfRange> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ScoreOutOfRange { value });
        }
        Ok(Self(value as u8))
    }

    /// The rating as a plain integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True when this score is strictly below `threshold`.
    pub fn is_below(self, threshold: u8) -> bool {
        self.0 < threshold
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(Score::new(1).unwrap().value(), 1);
        assert_eq!(Score::new(10).unwrap().value(), 10);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(Score::new(0), Err(ScoreOutOfRange { value: 0 }));
        assert_eq!(Score::new(11), Err(ScoreOutOfRange { value: 11 }));
        assert_eq!(Score::new(-3), Err(ScoreOutOfRange { value: -3 }));
    }

    #[test]
    fn test_is_below() {
        let score = Score::new(4).unwrap();
        assert!(score.is_below(5));
        assert!(!Score::new(5).unwrap().is_below(5));
    }

    #[test]
    fn test_deserialize_checks_range() {
        let ok: Score = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("12").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::new(8).unwrap().to_string(), "8/10");
    }
}
