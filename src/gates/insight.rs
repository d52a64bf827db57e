//! Tiny-change concreteness check.
//!
//! The day's "tiny change" is kept only if the user confirms it is
//! concrete and actionable, or replaces it with a revision.

/// Outcome of the tiny-change check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightVerdict {
    Kept(String),
    Dropped,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGate;

impl InsightGate {
    /// `concrete` is the user's answer to "is this concrete and actionable?";
    /// `revised` is only consulted when it is `false`.
    pub fn enforce(&self, tiny_change: &str, concrete: bool, revised: Option<&str>) -> InsightVerdict {
        let change = tiny_change.trim();
        if change.is_empty() {
            return InsightVerdict::Dropped;
        }
        if concrete {
            return InsightVerdict::Kept(change.to_string());
        }

        match revised.map(str::trim).filter(|r| !r.is_empty()) {
            Some(revision) => InsightVerdict::Kept(revision.to_string()),
            None => InsightVerdict::Dropped,
        }
    }
}
