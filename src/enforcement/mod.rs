//! Loop enforcement
//!
//! The controller runs the gates against a `DayRecord` in the required
//! order and applies their verdicts:
//! - Gate 1 before any entry work
//! - Gate 2 and Gate 3 together, committing an entry all-or-nothing
//! - Gate 4 once per day, after the first completed entry
//!
//! Every call takes the record by reference and, when it changes
//! anything, returns the full updated copy. A rejected or failed call
//! leaves the caller's record exactly as it was.

mod controller;
mod outcome;

pub use controller::LoopController;
pub use outcome::{DailyOutcome, EntryOutcome, InsightOutcome, IntentionOutcome, StateOutcome};
