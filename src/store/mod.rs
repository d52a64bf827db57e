//! Journal store
//!
//! One pretty-printed JSON document per calendar date, written atomically.
//! The store never validates gate rules; it persists whatever record the
//! controller hands it.

mod errors;
mod journal;

pub use errors::{StoreError, StoreResult};
pub use journal::JournalStore;
