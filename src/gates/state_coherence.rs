//! Gate 1: State Coherence
//!
//! Inner state must be clear before any entry work is allowed.
//! A score below the threshold blocks the day and offers reset actions;
//! the low score itself is never recorded.

use std::fmt;

use crate::config::DEFAULT_THRESHOLD;
use crate::model::Score;

/// Ways to reset inner state before re-rating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetAction {
    Walk,
    Breathe,
    Write,
    Sit,
}

/// Reset actions, in the order they are offered.
pub const RESET_ACTIONS: [ResetAction; 4] = [
    ResetAction::Walk,
    ResetAction::Breathe,
    ResetAction::Write,
    ResetAction::Sit,
];

impl ResetAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Breathe => "breathe",
            Self::Write => "write",
            Self::Sit => "sit",
        }
    }

    /// Human-readable instruction.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Walk => "Walk (5-10 min)",
            Self::Breathe => "Breathe deeply (2 min)",
            Self::Write => "Write state on paper (3 min)",
            Self::Sit => "Close eyes, sit still (5 min)",
        }
    }
}

impl fmt::Display for ResetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Gate 1 decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateVerdict {
    /// State is coherent; entry work may proceed.
    Pass(Score),
    /// State is conflicted; reset and rate again.
    Blocked {
        score: Score,
        reset_options: &'static [ResetAction],
    },
}

impl StateVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }
}

/// Threshold check on the inner-state clarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCoherenceGate {
    threshold: u8,
}

impl Default for StateCoherenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl StateCoherenceGate {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Decide pass or block. Pure; the controller applies the result.
    pub fn evaluate(&self, score: Score) -> StateVerdict {
        if score.is_below(self.threshold) {
            StateVerdict::Blocked {
                score,
                reset_options: &RESET_ACTIONS,
            }
        } else {
            StateVerdict::Pass(score)
        }
    }
}
