//! Per-date journal record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, EntryRecord, Score};

/// Full persisted state for one calendar date.
///
/// `entries` is ordered by category so that a load followed by a save
/// reproduces the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    date: NaiveDate,
    day_number: u32,
    #[serde(default)]
    intention: Option<String>,
    #[serde(default)]
    state_coherence_score: Option<Score>,
    #[serde(default)]
    state_coherence_checked: bool,
    #[serde(default)]
    daily_coherence_checked: bool,
    #[serde(default)]
    tiny_change: Option<String>,
    #[serde(default)]
    entries: BTreeMap<Category, EntryRecord>,
}

impl DayRecord {
    /// Fresh record with no intention, no scores and no entries.
    pub fn new(date: NaiveDate, day_number: u32) -> Self {
        Self {
            date,
            day_number,
            intention: None,
            state_coherence_score: None,
            state_coherence_checked: false,
            daily_coherence_checked: false,
            tiny_change: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    pub fn intention(&self) -> Option<&str> {
        self.intention.as_deref()
    }

    pub fn state_coherence_score(&self) -> Option<Score> {
        self.state_coherence_score
    }

    /// Gate 1 has passed at least once today.
    pub fn state_coherence_checked(&self) -> bool {
        self.state_coherence_checked
    }

    /// Gate 4 has run today.
    pub fn daily_coherence_checked(&self) -> bool {
        self.daily_coherence_checked
    }

    pub fn tiny_change(&self) -> Option<&str> {
        self.tiny_change.as_deref()
    }

    pub fn entry(&self, category: Category) -> Option<&EntryRecord> {
        self.entries.get(&category)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Category, &EntryRecord)> {
        self.entries.iter().map(|(c, e)| (*c, e))
    }

    /// Categories whose entry is completed, in category order.
    pub fn completed_categories(&self) -> Vec<Category> {
        self.entries
            .iter()
            .filter(|(_, e)| e.is_completed())
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn has_completed_entry(&self) -> bool {
        self.entries.values().any(EntryRecord::is_completed)
    }

    pub(crate) fn set_intention(&mut self, intention: String) {
        self.intention = Some(intention);
    }

    pub(crate) fn pass_state_coherence(&mut self, score: Score) {
        self.state_coherence_score = Some(score);
        self.state_coherence_checked = true;
    }

    pub(crate) fn mark_daily_coherence_checked(&mut self) {
        self.daily_coherence_checked = true;
    }

    pub(crate) fn set_tiny_change(&mut self, change: String) {
        self.tiny_change = Some(change);
    }

    pub(crate) fn put_entry(&mut self, category: Category, entry: EntryRecord) {
        self.entries.insert(category, entry);
    }
}
