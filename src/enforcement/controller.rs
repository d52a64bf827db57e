//! Loop Enforcement Controller
//!
//! Coordinates the four gates against one day's record.
//!
//! Non-Responsibilities:
//! - Does not read input or print
//! - Does not write files
//! - Does not retry automatically
//!
//! The controller validates everything first and only then builds the
//! updated record, so each call either fully applies or changes nothing.

use chrono::NaiveDate;

use super::outcome::{DailyOutcome, EntryOutcome, InsightOutcome, IntentionOutcome, StateOutcome};
use crate::config::EngineConfig;
use crate::gates::{
    BackwardDebugGate, CausalityChainGate, ChainAnswers, ChainVerdict, DailyCoherenceGate,
    DailyPrompt, DailyVerdict, DebugAnswers, DebugVerdict, GateError, GateResult, InsightGate,
    InsightVerdict, Precondition, Rejection, RejectionReason, Stage, StateCoherenceGate,
    StateVerdict,
};
use crate::model::{Category, DayRecord, EntryRecord, Score};
use crate::observability::{log_event, Event};

/// Loop Enforcement Controller
///
/// Owns the gates, configured once from an [`EngineConfig`], and the
/// notion of "today" used to keep past records read-only.
#[derive(Debug, Clone)]
pub struct LoopController {
    today: NaiveDate,
    state_gate: StateCoherenceGate,
    chain_gate: CausalityChainGate,
    debug_gate: BackwardDebugGate,
    daily_gate: DailyCoherenceGate,
    insight_gate: InsightGate,
}

impl LoopController {
    pub fn new(config: &EngineConfig, today: NaiveDate) -> Self {
        let detector = config.detector();
        let debug_detector = config
            .detect_vague_debug_fields
            .then(|| detector.clone());

        Self {
            today,
            state_gate: StateCoherenceGate::new(config.state_threshold),
            chain_gate: CausalityChainGate::new(detector),
            debug_gate: BackwardDebugGate::new(config.debug_threshold, debug_detector),
            daily_gate: DailyCoherenceGate::new(),
            insight_gate: InsightGate,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Gate 2, for hosts that prompt one layer at a time.
    pub fn chain_gate(&self) -> &CausalityChainGate {
        &self.chain_gate
    }

    /// Gate 3, for hosts that prompt one trace field at a time.
    pub fn debug_gate(&self) -> &BackwardDebugGate {
        &self.debug_gate
    }

    // =========================================================================
    // DAY LIFECYCLE
    // =========================================================================

    /// Create a fresh record. `day_number` is assigned by the host.
    pub fn open_day(&self, date: NaiveDate, day_number: u32) -> DayRecord {
        log_event(
            Event::DayOpened,
            &[
                ("date", date.to_string().as_str()),
                ("day_number", day_number.to_string().as_str()),
            ],
        );
        DayRecord::new(date, day_number)
    }

    /// Discard every entry and flag, keeping date and day number.
    pub fn reset_day(&self, day: &DayRecord) -> GateResult<DayRecord> {
        self.ensure_current(day)?;
        log_event(Event::DayReset, &[("date", day.date().to_string().as_str())]);
        Ok(DayRecord::new(day.date(), day.day_number()))
    }

    /// Record the day's intention. Locked once Gate 1 has passed.
    pub fn set_intention(&self, day: &DayRecord, intention: &str) -> GateResult<IntentionOutcome> {
        self.ensure_current(day)?;
        if day.state_coherence_checked() {
            return Err(Self::violated(Precondition::IntentionLocked));
        }

        let intention = intention.trim();
        if intention.is_empty() {
            return Ok(IntentionOutcome::Rejected(Rejection::new(
                Stage::Intention,
                RejectionReason::Missing,
            )));
        }

        let mut record = day.clone();
        record.set_intention(intention.to_string());
        log_event(Event::IntentionSet, &[("intention", intention)]);
        Ok(IntentionOutcome::Set { record })
    }

    // =========================================================================
    // GATE 1
    // =========================================================================

    /// Rate inner-state clarity. A blocked rating changes nothing.
    ///
    /// Passing locks the intention, so one must be set first.
    pub fn evaluate_state(&self, day: &DayRecord, raw_score: i64) -> GateResult<StateOutcome> {
        let score = Score::new(raw_score)?;
        self.ensure_current(day)?;
        if day.intention().is_none() {
            return Err(Self::violated(Precondition::MissingIntention));
        }

        match self.state_gate.evaluate(score) {
            StateVerdict::Pass(score) => {
                let mut record = day.clone();
                record.pass_state_coherence(score);
                log_event(Event::StateGatePassed, &[("score", score.value().to_string().as_str())]);
                Ok(StateOutcome::Pass { record })
            }
            StateVerdict::Blocked {
                score,
                reset_options,
            } => {
                log_event(
                    Event::StateGateBlocked,
                    &[
                        ("score", score.value().to_string().as_str()),
                        ("threshold", self.state_gate.threshold().to_string().as_str()),
                    ],
                );
                Ok(StateOutcome::Blocked {
                    score,
                    reset_options,
                })
            }
        }
    }

    // =========================================================================
    // GATES 2 + 3
    // =========================================================================

    /// Run Gate 2 alone. Nothing is written.
    pub fn check_chain(
        &self,
        day: &DayRecord,
        category: Category,
        answers: &ChainAnswers,
    ) -> GateResult<ChainVerdict> {
        self.ensure_current(day)?;
        let verdict = Self::logged(self.chain_gate.advance(day, category, answers))?;
        if let ChainVerdict::Rejected(rejection) = &verdict {
            Self::log_rejection(category, rejection);
        }
        Ok(verdict)
    }

    /// True when `raw_edge` requires a root-cause trace.
    pub fn debug_required(&self, raw_edge: i64) -> GateResult<bool> {
        Ok(self.debug_gate.is_triggered(Score::new(raw_edge)?))
    }

    /// Commit a category's entry.
    ///
    /// The chain, the edge score and (for a low score) the root-cause
    /// trace are written together or not at all. Re-recording a category
    /// replaces its entry.
    pub fn record_entry(
        &self,
        day: &DayRecord,
        category: Category,
        answers: &ChainAnswers,
        raw_edge: i64,
        debug: &DebugAnswers,
    ) -> GateResult<EntryOutcome> {
        let edge_score = Score::new(raw_edge)?;
        self.ensure_current(day)?;

        let chain = match Self::logged(self.chain_gate.advance(day, category, answers))? {
            ChainVerdict::Accepted(chain) => chain,
            ChainVerdict::Rejected(rejection) => {
                Self::log_rejection(category, &rejection);
                return Ok(EntryOutcome::Rejected(rejection));
            }
        };

        let trace = match Self::logged(self.debug_gate.collect(edge_score, debug))? {
            DebugVerdict::NotTriggered => None,
            DebugVerdict::Complete(trace) => Some(trace),
            DebugVerdict::Rejected(rejection) => {
                log_event(
                    Event::DebugTraceRejected,
                    &[
                        ("category", category.label()),
                        ("stage", rejection.stage.as_str()),
                        ("edge_score", edge_score.value().to_string().as_str()),
                    ],
                );
                return Ok(EntryOutcome::Rejected(rejection));
            }
        };

        let has_trace = trace.is_some();
        let (attention, action, result) = chain.into_layers();
        let mut record = day.clone();
        record.put_entry(
            category,
            EntryRecord::completed(attention, action, result, edge_score, trace),
        );

        if has_trace {
            log_event(Event::DebugTraceRecorded, &[("category", category.label())]);
        }
        log_event(
            Event::EntryCommitted,
            &[
                ("category", category.label()),
                ("edge_score", edge_score.value().to_string().as_str()),
            ],
        );

        let daily_check_due = self.daily_gate.is_due(&record);
        Ok(EntryOutcome::Committed {
            record,
            daily_check_due,
        })
    }

    // =========================================================================
    // GATE 4
    // =========================================================================

    /// Prompt data for Gate 4, or `None` when it is not due.
    pub fn daily_coherence_prompt(&self, day: &DayRecord) -> Option<DailyPrompt> {
        self.daily_gate.prompt(day)
    }

    /// Answer Gate 4. Runs at most once per day.
    pub fn daily_coherence(&self, day: &DayRecord, consistent: bool) -> GateResult<DailyOutcome> {
        self.ensure_current(day)?;

        let verdict = Self::logged(self.daily_gate.check(day, consistent))?;
        let mut record = day.clone();
        match verdict {
            DailyVerdict::AlreadyChecked => Ok(DailyOutcome::AlreadyChecked),
            DailyVerdict::Consistent => {
                record.mark_daily_coherence_checked();
                log_event(Event::DailyCoherenceConsistent, &[]);
                Ok(DailyOutcome::Consistent { record })
            }
            DailyVerdict::Inconsistent { reset_options } => {
                record.mark_daily_coherence_checked();
                log_event(Event::DailyCoherenceInconsistent, &[]);
                Ok(DailyOutcome::Inconsistent {
                    record,
                    reset_options,
                })
            }
        }
    }

    // =========================================================================
    // TINY CHANGE
    // =========================================================================

    /// Keep the day's tiny change if it is concrete, or its revision.
    pub fn record_insight(
        &self,
        day: &DayRecord,
        tiny_change: &str,
        concrete: bool,
        revised: Option<&str>,
    ) -> GateResult<InsightOutcome> {
        self.ensure_current(day)?;
        if !day.state_coherence_checked() {
            return Err(Self::violated(Precondition::StateGateNotPassed));
        }

        match self.insight_gate.enforce(tiny_change, concrete, revised) {
            InsightVerdict::Dropped => Ok(InsightOutcome::Dropped),
            InsightVerdict::Kept(change) => {
                let mut record = day.clone();
                record.set_tiny_change(change);
                log_event(Event::InsightRecorded, &[]);
                Ok(InsightOutcome::Kept { record })
            }
        }
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn ensure_current(&self, day: &DayRecord) -> GateResult<()> {
        let (date, today) = (day.date(), self.today);
        if date < today {
            return Err(Self::violated(Precondition::PastRecord { date, today }));
        }
        if date > today {
            return Err(Self::violated(Precondition::FutureRecord { date, today }));
        }
        Ok(())
    }

    fn violated(precondition: Precondition) -> GateError {
        Self::log_violation(&precondition);
        GateError::precondition(precondition)
    }

    fn logged<T>(result: GateResult<T>) -> GateResult<T> {
        if let Err(GateError::StatePrecondition(precondition)) = &result {
            Self::log_violation(precondition);
        }
        result
    }

    fn log_violation(precondition: &Precondition) {
        log_event(
            Event::PreconditionViolated,
            &[("reason", precondition.to_string().as_str())],
        );
    }

    fn log_rejection(category: Category, rejection: &Rejection) {
        let event = match rejection.reason {
            RejectionReason::ChainDenied => Event::ChainDenied,
            _ => Event::ChainStageRejected,
        };
        log_event(
            event,
            &[
                ("category", category.label()),
                ("reason", rejection.reason.as_str()),
                ("stage", rejection.stage.as_str()),
            ],
        );
    }
}
