//! Gate 2: Causality Chain
//!
//! Chain: inner state (intention) → attention → action → result.
//!
//! Each layer is asked in order, with the previous layer shown as context,
//! and must pass the vague-language detector on its own text. The chain is
//! anchored only when the user confirms every layer traces to the one
//! before it. A denied confirmation throws the whole attempt away.
//!
//! Relation between layers is enforced by sequence and self-confirmation.
//! No semantic matching between layers is attempted.

use super::errors::{GateError, GateResult, Precondition};
use super::stage::{Rejection, RejectionReason, Stage, Step};
use crate::language::{VagueLanguageDetector, Verdict};
use crate::model::{Category, DayRecord};

/// Raw answers for a whole chain attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAnswers {
    pub attention: String,
    pub action: String,
    pub result: String,
    /// "Can you trace each layer to the previous?"
    pub confirmed: bool,
}

impl ChainAnswers {
    pub fn new(
        attention: impl Into<String>,
        action: impl Into<String>,
        result: impl Into<String>,
        confirmed: bool,
    ) -> Self {
        Self {
            attention: attention.into(),
            action: action.into(),
            result: result.into(),
            confirmed,
        }
    }
}

/// A confirmed chain. Only a [`ChainDraft`] can produce one, so every
/// layer in it has passed the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredChain {
    category: Category,
    attention: String,
    action: String,
    result: String,
}

impl AnchoredChain {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn attention(&self) -> &str {
        &self.attention
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub(crate) fn into_layers(self) -> (String, String, String) {
        (self.attention, self.action, self.result)
    }
}

/// Outcome of the confirmation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Anchored(AnchoredChain),
    /// Chain discarded; the draft is back at the attention stage.
    Denied(Rejection),
}

/// Gate 2 decision over a full set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainVerdict {
    Accepted(AnchoredChain),
    Rejected(Rejection),
}

impl ChainVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Accepted(_) => None,
        }
    }
}

/// One chain attempt in progress, answered a stage at a time.
///
/// Nothing in a draft is persisted. Dropping it is a clean abandon.
#[derive(Debug, Clone)]
pub struct ChainDraft<'g> {
    detector: &'g VagueLanguageDetector,
    category: Category,
    intention: String,
    layers: Vec<String>,
}

impl<'g> ChainDraft<'g> {
    fn new(detector: &'g VagueLanguageDetector, category: Category, intention: &str) -> Self {
        Self {
            detector,
            category,
            intention: intention.to_string(),
            layers: Vec::with_capacity(3),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Stage awaiting input.
    pub fn stage(&self) -> Stage {
        match self.layers.len() {
            0 => Stage::Attention,
            1 => Stage::Action,
            2 => Stage::Result,
            _ => Stage::Confirmation,
        }
    }

    /// The layer the current question must trace back to.
    ///
    /// Attention traces to the intention; every later stage to the
    /// previous answer.
    pub fn context(&self) -> &str {
        self.layers.last().unwrap_or(&self.intention)
    }

    /// Answer the current text stage.
    pub fn answer(&mut self, text: &str) -> GateResult<Step> {
        let stage = self.stage();
        if stage == Stage::Confirmation {
            return Err(GateError::precondition(Precondition::StageOutOfOrder {
                current: stage,
            }));
        }

        match self.detector.check(text) {
            Verdict::Accepted => {
                self.layers.push(text.trim().to_string());
                Ok(Step::Accepted {
                    next: Some(self.stage()),
                })
            }
            Verdict::Rejected(reason) => Ok(Step::Rejected(Rejection::vague(stage, reason))),
        }
    }

    /// Answer the traceability question.
    ///
    /// Either way the draft is emptied: a confirmed chain moves into the
    /// returned value, a denied one is discarded.
    pub fn confirm(&mut self, traced: bool) -> GateResult<Confirmation> {
        let stage = self.stage();
        if stage != Stage::Confirmation {
            return Err(GateError::precondition(Precondition::StageOutOfOrder {
                current: stage,
            }));
        }

        let mut layers = std::mem::take(&mut self.layers).into_iter();
        if !traced {
            return Ok(Confirmation::Denied(Rejection::new(
                Stage::Confirmation,
                RejectionReason::ChainDenied,
            )));
        }

        match (layers.next(), layers.next(), layers.next()) {
            (Some(attention), Some(action), Some(result)) => {
                Ok(Confirmation::Anchored(AnchoredChain {
                    category: self.category,
                    attention,
                    action,
                    result,
                }))
            }
            _ => Err(GateError::precondition(Precondition::StageOutOfOrder {
                current: Stage::Attention,
            })),
        }
    }
}

/// Validates attention → action → result chains.
#[derive(Debug, Clone, Default)]
pub struct CausalityChainGate {
    detector: VagueLanguageDetector,
}

impl CausalityChainGate {
    pub fn new(detector: VagueLanguageDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &VagueLanguageDetector {
        &self.detector
    }

    /// Start a staged attempt anchored to `intention`.
    pub fn draft(&self, category: Category, intention: &str) -> ChainDraft<'_> {
        ChainDraft::new(&self.detector, category, intention)
    }

    /// Run a complete set of answers through the four stages.
    ///
    /// Stops at the first rejected stage. Does not touch `day`.
    pub fn advance(
        &self,
        day: &DayRecord,
        category: Category,
        answers: &ChainAnswers,
    ) -> GateResult<ChainVerdict> {
        if !day.state_coherence_checked() {
            return Err(GateError::precondition(Precondition::StateGateNotPassed));
        }
        let intention = day
            .intention()
            .ok_or_else(|| GateError::precondition(Precondition::MissingIntention))?;

        let mut draft = self.draft(category, intention);
        for text in [&answers.attention, &answers.action, &answers.result] {
            if let Step::Rejected(rejection) = draft.answer(text)? {
                return Ok(ChainVerdict::Rejected(rejection));
            }
        }

        Ok(match draft.confirm(answers.confirmed)? {
            Confirmation::Anchored(chain) => ChainVerdict::Accepted(chain),
            Confirmation::Denied(rejection) => ChainVerdict::Rejected(rejection),
        })
    }
}
