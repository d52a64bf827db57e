//! Vague-language detection
//!
//! Concreteness is judged by deterministic pattern rules only:
//! - A fixed table of banned phrases, matched as case-insensitive substrings
//! - A minimum token count
//!
//! Detection is pure. The same text always yields the same verdict.

mod detector;
mod phrases;

pub use detector::{normalize, VagueLanguageDetector, VagueReason, Verdict};
pub use phrases::{PhraseTable, DEFAULT_BANNED_PHRASES, DEFAULT_MIN_TOKENS};
