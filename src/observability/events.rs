//! Observable events for zenloop
//!
//! Events are explicit and typed. Every gate decision the controller
//! applies, and every record the store reads or writes, has one.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded and validated
    ConfigLoaded,

    // Day lifecycle
    /// Day record created
    DayOpened,
    /// Day record discarded and recreated
    DayReset,
    /// Intention recorded
    IntentionSet,

    // Gate 1
    /// State coherence gate passed
    StateGatePassed,
    /// State coherence gate blocked entry work
    StateGateBlocked,

    // Gate 2
    /// A chain layer failed the vague-language detector
    ChainStageRejected,
    /// The user could not trace the chain
    ChainDenied,
    /// Entry written with its edge score
    EntryCommitted,

    // Gate 3
    /// Low edge score arrived without a complete trace
    DebugTraceRejected,
    /// Root-cause trace stored with an entry
    DebugTraceRecorded,

    // Gate 4
    /// Inner state reported consistent with the day's actions
    DailyCoherenceConsistent,
    /// Inner state reported inconsistent; reset offered
    DailyCoherenceInconsistent,

    /// Tiny change stored
    InsightRecorded,
    /// A gate was called out of order
    PreconditionViolated,

    // Store
    /// Day record loaded from disk
    RecordLoaded,
    /// Day record written to disk
    RecordSaved,
}

impl Event {
    /// Every event, in catalogue order.
    pub const ALL: [Event; 17] = [
        Event::ConfigLoaded,
        Event::DayOpened,
        Event::DayReset,
        Event::IntentionSet,
        Event::StateGatePassed,
        Event::StateGateBlocked,
        Event::ChainStageRejected,
        Event::ChainDenied,
        Event::EntryCommitted,
        Event::DebugTraceRejected,
        Event::DebugTraceRecorded,
        Event::DailyCoherenceConsistent,
        Event::DailyCoherenceInconsistent,
        Event::InsightRecorded,
        Event::PreconditionViolated,
        Event::RecordLoaded,
        Event::RecordSaved,
    ];

    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::DayOpened => "DAY_OPENED",
            Event::DayReset => "DAY_RESET",
            Event::IntentionSet => "INTENTION_SET",

            Event::StateGatePassed => "GATE_STATE_PASSED",
            Event::StateGateBlocked => "GATE_STATE_BLOCKED",

            Event::ChainStageRejected => "GATE_CHAIN_STAGE_REJECTED",
            Event::ChainDenied => "GATE_CHAIN_DENIED",
            Event::EntryCommitted => "ENTRY_COMMITTED",

            Event::DebugTraceRejected => "GATE_DEBUG_REJECTED",
            Event::DebugTraceRecorded => "GATE_DEBUG_RECORDED",

            Event::DailyCoherenceConsistent => "GATE_DAILY_CONSISTENT",
            Event::DailyCoherenceInconsistent => "GATE_DAILY_INCONSISTENT",

            Event::InsightRecorded => "INSIGHT_RECORDED",

            Event::RecordLoaded => "RECORD_LOADED",
            Event::RecordSaved => "RECORD_SAVED",
            Event::PreconditionViolated => "PRECONDITION_VIOLATED",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> Severity {
        match self {
            Event::StateGateBlocked
            | Event::ChainStageRejected
            | Event::ChainDenied
            | Event::DebugTraceRejected
            | Event::DailyCoherenceInconsistent => Severity::Warn,
            Event::PreconditionViolated => Severity::Error,
            Event::RecordLoaded => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
