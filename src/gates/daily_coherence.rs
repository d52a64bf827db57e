//! Gate 4: Daily Coherence
//!
//! Once per day, after the first entry completes, ask whether inner
//! state matches the day's actions. Either answer closes the check for
//! the day. An inconsistent answer offers a state reset but never blocks.

use super::errors::{GateError, GateResult, Precondition};
use super::state_coherence::{ResetAction, RESET_ACTIONS};
use crate::model::{Category, DayRecord};

/// What the host shows before asking the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPrompt {
    pub intention: String,
    pub completed: Vec<Category>,
}

/// Gate 4 decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyVerdict {
    Consistent,
    Inconsistent {
        reset_options: &'static [ResetAction],
    },
    /// Already answered today; nothing to do.
    AlreadyChecked,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCoherenceGate;

impl DailyCoherenceGate {
    pub fn new() -> Self {
        Self
    }

    /// True when the question should be asked now.
    pub fn is_due(&self, day: &DayRecord) -> bool {
        !day.daily_coherence_checked() && day.has_completed_entry()
    }

    /// Prompt data, or `None` when the check is not due.
    pub fn prompt(&self, day: &DayRecord) -> Option<DailyPrompt> {
        if !self.is_due(day) {
            return None;
        }
        Some(DailyPrompt {
            intention: day.intention().unwrap_or_default().to_string(),
            completed: day.completed_categories(),
        })
    }

    /// Judge the user's answer.
    pub fn check(&self, day: &DayRecord, consistent: bool) -> GateResult<DailyVerdict> {
        if day.daily_coherence_checked() {
            return Ok(DailyVerdict::AlreadyChecked);
        }
        if !day.has_completed_entry() {
            return Err(GateError::precondition(Precondition::NoCompletedEntry));
        }

        Ok(if consistent {
            DailyVerdict::Consistent
        } else {
            DailyVerdict::Inconsistent {
                reset_options: &RESET_ACTIONS,
            }
        })
    }
}
