//! Gate 3: Backward Debug
//!
//! When an entry's edge score is low, debug backward only:
//! result → action → words → attention → inner state.
//!
//! All five answers are required. A trace that stops early is never
//! handed out, so it can never be written.

use super::errors::{GateError, GateResult, Precondition};
use super::stage::{Rejection, RejectionReason, Stage, Step, DEBUG_STAGES};
use crate::config::DEFAULT_THRESHOLD;
use crate::language::{VagueLanguageDetector, Verdict};
use crate::model::{DebugTrace, Score};

/// Raw trace answers as collected by the host. `None` means the user
/// stopped before that question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugAnswers {
    pub bad_result: Option<String>,
    pub wrong_action: Option<String>,
    pub wrong_words: Option<String>,
    pub wrong_attention: Option<String>,
    pub root_cause_state: Option<String>,
}

impl DebugAnswers {
    /// Answers in collection order.
    pub fn in_order(&self) -> [Option<&str>; 5] {
        [
            self.bad_result.as_deref(),
            self.wrong_action.as_deref(),
            self.wrong_words.as_deref(),
            self.wrong_attention.as_deref(),
            self.root_cause_state.as_deref(),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.in_order().iter().all(Option::is_none)
    }
}

/// Whether an edge score calls for a trace.
#[derive(Debug, Clone)]
pub enum DebugTrigger<'g> {
    NotTriggered,
    Required(DebugDraft<'g>),
}

/// Gate 3 decision over a full set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugVerdict {
    /// Edge score at or above threshold; no trace belongs on the entry.
    NotTriggered,
    Complete(DebugTrace),
    Rejected(Rejection),
}

/// A root-cause trace in progress.
#[derive(Debug, Clone)]
pub struct DebugDraft<'g> {
    gate: &'g BackwardDebugGate,
    edge_score: Score,
    answers: Vec<String>,
}

impl<'g> DebugDraft<'g> {
    pub fn edge_score(&self) -> Score {
        self.edge_score
    }

    /// Stage awaiting input, or `None` once all five are in.
    pub fn stage(&self) -> Option<Stage> {
        DEBUG_STAGES.get(self.answers.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.stage().is_none()
    }

    /// Answer the current stage.
    pub fn answer(&mut self, text: &str) -> GateResult<Step> {
        let stage = self
            .stage()
            .ok_or_else(|| GateError::precondition(Precondition::DraftFinished))?;

        if let Some(rejection) = self.gate.check_field(stage, text) {
            return Ok(Step::Rejected(rejection));
        }

        self.answers.push(text.trim().to_string());
        Ok(Step::Accepted { next: self.stage() })
    }

    /// Seal the trace. Fails with the first unanswered stage if the user
    /// stopped early.
    pub fn finish(self) -> Result<DebugTrace, Rejection> {
        if let Some(missing) = self.stage() {
            return Err(Rejection::new(missing, RejectionReason::DebugTraceIncomplete));
        }

        let mut answers = self.answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        Ok(DebugTrace::new([next(), next(), next(), next(), next()]))
    }
}

/// Root-cause capture for low edge scores.
#[derive(Debug, Clone)]
pub struct BackwardDebugGate {
    threshold: u8,
    detector: Option<VagueLanguageDetector>,
}

impl Default for BackwardDebugGate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, None)
    }
}

impl BackwardDebugGate {
    /// `detector` is optional: root-cause statements are more abstract than
    /// action logs, so by default they only need to be non-empty.
    pub fn new(threshold: u8, detector: Option<VagueLanguageDetector>) -> Self {
        Self { threshold, detector }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn is_triggered(&self, edge_score: Score) -> bool {
        edge_score.is_below(self.threshold)
    }

    /// Open a draft when `edge_score` is below the threshold.
    pub fn trigger(&self, edge_score: Score) -> DebugTrigger<'_> {
        if !self.is_triggered(edge_score) {
            return DebugTrigger::NotTriggered;
        }
        DebugTrigger::Required(DebugDraft {
            gate: self,
            edge_score,
            answers: Vec::with_capacity(DEBUG_STAGES.len()),
        })
    }

    /// Run collected answers through a draft.
    ///
    /// Answers are consumed in order up to the first gap; anything after a
    /// gap is ignored, matching a user who stopped answering.
    pub fn collect(&self, edge_score: Score, answers: &DebugAnswers) -> GateResult<DebugVerdict> {
        let mut draft = match self.trigger(edge_score) {
            DebugTrigger::NotTriggered if answers.is_empty() => {
                return Ok(DebugVerdict::NotTriggered)
            }
            DebugTrigger::NotTriggered => {
                return Err(GateError::precondition(Precondition::DebugNotTriggered {
                    edge_score,
                }))
            }
            DebugTrigger::Required(draft) => draft,
        };

        for text in answers.in_order().into_iter().map_while(|a| a) {
            if let Step::Rejected(rejection) = draft.answer(text)? {
                return Ok(DebugVerdict::Rejected(rejection));
            }
        }

        Ok(match draft.finish() {
            Ok(trace) => DebugVerdict::Complete(trace),
            Err(rejection) => DebugVerdict::Rejected(rejection),
        })
    }

    fn check_field(&self, stage: Stage, text: &str) -> Option<Rejection> {
        if text.trim().is_empty() {
            return Some(Rejection::new(stage, RejectionReason::Missing));
        }
        match self.detector.as_ref().map(|d| d.check(text)) {
            Some(Verdict::Rejected(reason)) => Some(Rejection::vague(stage, reason)),
            _ => None,
        }
    }
}
