//! Journal data model
//!
//! One `DayRecord` per calendar date, holding at most one `EntryRecord`
//! per `Category`. Records are plain serde documents; every mutation goes
//! through the controller so the gate invariants hold on anything written.

mod category;
mod day;
mod entry;
mod score;

pub use category::{Category, UnknownCategory};
pub use day::DayRecord;
pub use entry::{DebugTrace, EntryRecord};
pub use score::{Score, ScoreOutOfRange};
