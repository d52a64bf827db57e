//! Gate engine
//!
//! Four gates decide whether an answer may advance a day's record:
//! - Gate 1: state coherence, a day-level precondition for entry work
//! - Gate 2: causality chain, attention → action → result plus confirmation
//! - Gate 3: backward debug, a five-step root-cause trace for low edge scores
//! - Gate 4: daily coherence, asked once after the first completed entry
//!
//! Gates are pure. They read a `DayRecord` but never modify it; the
//! controller applies their verdicts.

mod backward_debug;
mod causality;
mod daily_coherence;
mod errors;
mod insight;
mod stage;
mod state_coherence;

pub use backward_debug::{BackwardDebugGate, DebugAnswers, DebugDraft, DebugTrigger, DebugVerdict};
pub use causality::{
    AnchoredChain, CausalityChainGate, ChainAnswers, ChainDraft, ChainVerdict, Confirmation,
};
pub use daily_coherence::{DailyCoherenceGate, DailyPrompt, DailyVerdict};
pub use errors::{GateError, GateResult, Precondition, Severity};
pub use insight::{InsightGate, InsightVerdict};
pub use stage::{Rejection, RejectionReason, Stage, Step, DEBUG_STAGES};
pub use state_coherence::{ResetAction, StateCoherenceGate, StateVerdict, RESET_ACTIONS};
