//! Controller outcomes.
//!
//! Mutating outcomes carry the updated record for the host to persist.

use crate::gates::{Rejection, ResetAction};
use crate::model::{DayRecord, Score};

/// Result of setting the day's intention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentionOutcome {
    Set { record: DayRecord },
    Rejected(Rejection),
}

/// Result of Gate 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateOutcome {
    Pass { record: DayRecord },
    /// Nothing was recorded; reset and rate again.
    Blocked {
        score: Score,
        reset_options: &'static [ResetAction],
    },
}

/// Result of committing an entry through Gates 2 and 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Committed {
        record: DayRecord,
        /// Gate 4 has not run yet today and should be asked now.
        daily_check_due: bool,
    },
    Rejected(Rejection),
}

/// Result of Gate 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyOutcome {
    Consistent {
        record: DayRecord,
    },
    /// Check closed for the day; offer a state reset.
    Inconsistent {
        record: DayRecord,
        reset_options: &'static [ResetAction],
    },
    AlreadyChecked,
}

/// Result of the tiny-change check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightOutcome {
    Kept { record: DayRecord },
    Dropped,
}

impl IntentionOutcome {
    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Self::Set { record } => Some(record),
            Self::Rejected(_) => None,
        }
    }
}

impl StateOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Self::Pass { record } => Some(record),
            Self::Blocked { .. } => None,
        }
    }
}

impl EntryOutcome {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Committed { .. } => None,
        }
    }

    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Self::Committed { record, .. } => Some(record),
            Self::Rejected(_) => None,
        }
    }
}

impl DailyOutcome {
    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Self::Consistent { record } | Self::Inconsistent { record, .. } => Some(record),
            Self::AlreadyChecked => None,
        }
    }
}

impl InsightOutcome {
    pub fn into_record(self) -> Option<DayRecord> {
        match self {
            Self::Kept { record } => Some(record),
            Self::Dropped => None,
        }
    }
}
