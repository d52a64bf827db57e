//! Vague-language detector.

use std::fmt;

use super::phrases::{PhraseTable, DEFAULT_MIN_TOKENS};

/// Outcome of a concreteness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Text is concrete enough to record.
    Accepted,
    /// Text is vague, with the rule that rejected it.
    Rejected(VagueReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn reason(&self) -> Option<&VagueReason> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Accepted => None,
        }
    }
}

/// Why a text was judged vague.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VagueReason {
    /// Nothing but whitespace.
    Empty,
    /// Contains a banned phrase.
    BannedPhrase(String),
    /// Fewer tokens than the configured minimum.
    TooShort { tokens: usize, minimum: usize },
}

impl fmt::Display for VagueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no text given"),
            Self::BannedPhrase(phrase) => write!(f, "vague language detected: \"{}\"", phrase),
            Self::TooShort { tokens, minimum } => write!(
                f,
                "too vague: {} word(s), at least {} required",
                tokens, minimum
            ),
        }
    }
}

/// Lowercase `text` and collapse every whitespace run to one space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Table-driven concreteness check.
///
/// Rules, in order:
/// 1. Reject if the normalized text contains any banned phrase
/// 2. Reject if the text is empty or has fewer than `min_tokens` tokens
/// 3. Accept otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VagueLanguageDetector {
    phrases: PhraseTable,
    min_tokens: usize,
}

impl Default for VagueLanguageDetector {
    fn default() -> Self {
        Self::new(PhraseTable::default(), DEFAULT_MIN_TOKENS)
    }
}

impl VagueLanguageDetector {
    pub fn new(phrases: PhraseTable, min_tokens: usize) -> Self {
        Self { phrases, min_tokens }
    }

    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    /// Judge `text`.
    pub fn check(&self, text: &str) -> Verdict {
        let normalized = normalize(text);

        if let Some(phrase) = self.phrases.find_in(&normalized) {
            return Verdict::Rejected(VagueReason::BannedPhrase(phrase.to_string()));
        }

        if normalized.is_empty() {
            return Verdict::Rejected(VagueReason::Empty);
        }

        let tokens = normalized.split(' ').count();
        if tokens < self.min_tokens {
            return Verdict::Rejected(VagueReason::TooShort {
                tokens,
                minimum: self.min_tokens,
            });
        }

        Verdict::Accepted
    }
}
