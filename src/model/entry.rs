//! Entry and root-cause trace records.

use serde::{Deserialize, Serialize};

use super::Score;

/// One category's record for a day.
///
/// Entries are only ever written whole: a completed chain together with
/// its edge score and, when the score is low, its root-cause trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    attention: String,
    action: String,
    result: String,
    edge_score: Option<Score>,
    completed: bool,
    #[serde(default)]
    debug: Option<DebugTrace>,
}

impl EntryRecord {
    pub(crate) fn completed(
        attention: String,
        action: String,
        result: String,
        edge_score: Score,
        debug: Option<DebugTrace>,
    ) -> Self {
        Self {
            attention,
            action,
            result,
            edge_score: Some(edge_score),
            completed: true,
            debug,
        }
    }

    /// What the attention layer focused on.
    pub fn attention(&self) -> &str {
        &self.attention
    }

    /// The concrete actions taken.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The concrete result that emerged.
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn edge_score(&self) -> Option<Score> {
        self.edge_score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Root-cause trace, present exactly when the edge score was low.
    pub fn debug(&self) -> Option<&DebugTrace> {
        self.debug.as_ref()
    }
}

/// Reverse trace from a bad result back to the inner state that caused it.
///
/// Field order follows collection order: result first, root cause last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugTrace {
    bad_result: String,
    wrong_action: String,
    wrong_words: String,
    wrong_attention: String,
    root_cause_state: String,
}

impl DebugTrace {
    pub(crate) fn new(fields: [String; 5]) -> Self {
        let [bad_result, wrong_action, wrong_words, wrong_attention, root_cause_state] = fields;
        Self {
            bad_result,
            wrong_action,
            wrong_words,
            wrong_attention,
            root_cause_state,
        }
    }

    pub fn bad_result(&self) -> &str {
        &self.bad_result
    }

    pub fn wrong_action(&self) -> &str {
        &self.wrong_action
    }

    pub fn wrong_words(&self) -> &str {
        &self.wrong_words
    }

    pub fn wrong_attention(&self) -> &str {
        &self.wrong_attention
    }

    pub fn root_cause_state(&self) -> &str {
        &self.root_cause_state
    }

    /// All five fields in collection order.
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.bad_result,
            &self.wrong_action,
            &self.wrong_words,
            &self.wrong_attention,
            &self.root_cause_state,
        ]
    }

    /// True when every field carries text.
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|f| !f.trim().is_empty())
    }
}
