//! Stage identifiers and validation rejections.

use std::fmt;

use crate::language::VagueReason;

/// A single prompt in the gate sequence.
///
/// Rejections name the stage so the host re-asks only that question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Intention,
    Attention,
    Action,
    Result,
    Confirmation,
    BadResult,
    WrongAction,
    WrongWords,
    WrongAttention,
    RootCauseState,
}

/// Root-cause trace stages in collection order.
pub const DEBUG_STAGES: [Stage; 5] = [
    Stage::BadResult,
    Stage::WrongAction,
    Stage::WrongWords,
    Stage::WrongAttention,
    Stage::RootCauseState,
];

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intention => "intention",
            Self::Attention => "attention",
            Self::Action => "action",
            Self::Result => "result",
            Self::Confirmation => "confirmation",
            Self::BadResult => "bad_result",
            Self::WrongAction => "wrong_action",
            Self::WrongWords => "wrong_words",
            Self::WrongAttention => "wrong_attention",
            Self::RootCauseState => "root_cause_state",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an answer was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The answer failed the vague-language detector.
    Vague(VagueReason),
    /// A required answer was blank.
    Missing,
    /// The user could not trace each layer to the previous one.
    ChainDenied,
    /// The root-cause trace stopped before all five answers.
    DebugTraceIncomplete,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vague(_) => "vague",
            Self::Missing => "missing",
            Self::ChainDenied => "chain_denied",
            Self::DebugTraceIncomplete => "debug_trace_incomplete",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vague(reason) => write!(f, "{}", reason),
            Self::Missing => write!(f, "an answer is required"),
            Self::ChainDenied => write!(f, "chain is not anchored: each layer must trace to the previous"),
            Self::DebugTraceIncomplete => write!(f, "root-cause trace is incomplete"),
        }
    }
}

/// A recoverable validation failure at one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub stage: Stage,
    pub reason: RejectionReason,
}

impl Rejection {
    /// Code shared by every validation rejection.
    pub const CODE: &'static str = "ZEN_VALIDATION_REJECTED";

    pub fn new(stage: Stage, reason: RejectionReason) -> Self {
        Self { stage, reason }
    }

    pub fn vague(stage: Stage, reason: VagueReason) -> Self {
        Self::new(stage, RejectionReason::Vague(reason))
    }

    pub fn is_vague(&self) -> bool {
        matches!(self.reason, RejectionReason::Vague(_))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rejected at {}: {}", Self::CODE, self.stage, self.reason)
    }
}

/// Result of feeding one answer to a staged draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Answer kept. `next` is the stage now awaiting input, if any.
    Accepted { next: Option<Stage> },
    /// Answer refused; the draft stays on the same stage.
    Rejected(Rejection),
}
