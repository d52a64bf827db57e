//! Gate error types
//!
//! Error codes:
//! - ZEN_INVALID_INPUT_RANGE (REJECT)
//! - ZEN_STATE_PRECONDITION (INTERNAL)
//!
//! Vague or unconfirmed answers are not errors. They come back as a
//! [`Rejection`](super::Rejection) inside the gate's outcome.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::Stage;
use crate::model::{Score, ScoreOutOfRange};

/// How the host should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad user input; re-prompt.
    Reject,
    /// Caller broke the gate sequence; report as an internal error.
    Internal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// Which ordering rule a call violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// Entry work attempted before Gate 1 passed today.
    StateGateNotPassed,
    /// Gate 1 and Gate 2 need the day's intention.
    MissingIntention,
    /// The intention is fixed once Gate 1 has passed.
    IntentionLocked,
    /// Records dated before today are read-only.
    PastRecord { date: NaiveDate, today: NaiveDate },
    /// Records dated after today cannot be written yet.
    FutureRecord { date: NaiveDate, today: NaiveDate },
    /// A root-cause trace was supplied for an edge score that does not trigger Gate 3.
    DebugNotTriggered { edge_score: Score },
    /// Gate 4 needs at least one completed entry.
    NoCompletedEntry,
    /// A staged draft was fed an answer for the wrong stage.
    StageOutOfOrder { current: Stage },
    /// A staged draft already holds every answer.
    DraftFinished,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateGateNotPassed => write!(f, "state coherence gate has not passed today"),
            Self::MissingIntention => write!(f, "no intention set for today"),
            Self::IntentionLocked => {
                write!(f, "intention is locked once the state coherence gate has passed")
            }
            Self::PastRecord { date, today } => {
                write!(f, "record for {} is history (today is {})", date, today)
            }
            Self::FutureRecord { date, today } => {
                write!(f, "record for {} has not started (today is {})", date, today)
            }
            Self::DebugNotTriggered { edge_score } => write!(
                f,
                "edge score {} does not trigger a root-cause trace",
                edge_score
            ),
            Self::NoCompletedEntry => write!(f, "no completed entry today"),
            Self::StageOutOfOrder { current } => {
                write!(f, "answer does not belong to current stage '{}'", current)
            }
            Self::DraftFinished => write!(f, "all answers already collected"),
        }
    }
}

/// Gate error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// Numeric input outside 1-10, caught before any gate logic.
    #[error("{0}")]
    InvalidInputRange(#[from] ScoreOutOfRange),

    /// A gate was invoked out of order.
    #[error("state precondition violated: {0}")]
    StatePrecondition(Precondition),
}

impl GateError {
    pub fn precondition(precondition: Precondition) -> Self {
        Self::StatePrecondition(precondition)
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInputRange(_) => "ZEN_INVALID_INPUT_RANGE",
            Self::StatePrecondition(_) => "ZEN_STATE_PRECONDITION",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::InvalidInputRange(_) => Severity::Reject,
            Self::StatePrecondition(_) => Severity::Internal,
        }
    }
}

/// Result type for gate operations
pub type GateResult<T> = Result<T, GateError>;
