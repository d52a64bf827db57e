//! zenloop - a strict, deterministic daily-journaling gate engine
//!
//! A day moves through four gates:
//! 1. State coherence: inner-state clarity must reach the threshold
//! 2. Causality chain: attention → action → result, each concrete and confirmed
//! 3. Backward debug: a low edge score requires a full root-cause trace
//! 4. Daily coherence: once per day, does inner state match the actions?
//!
//! The engine is pure. Every call takes a [`model::DayRecord`] and returns an
//! outcome carrying the updated record; the host decides when to persist it.

pub mod cli;
pub mod config;
pub mod enforcement;
pub mod gates;
pub mod language;
pub mod model;
pub mod observability;
pub mod store;
