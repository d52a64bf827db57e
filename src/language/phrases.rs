//! Banned-phrase table.

use super::detector::normalize;

/// Phrases that signal unanchored language.
///
/// Matching is a raw substring test, so short phrases that occur inside
/// ordinary words ("some" in "awesome", "a bit" in "data bitmap") are left out.
pub const DEFAULT_BANNED_PHRASES: &[&str] = &[
    "worked on",
    "made progress",
    "did stuff",
    "tried things",
    "learned stuff",
    "looked at",
    "thought about",
    "kind of",
    "sort of",
    "basically",
    "mostly",
];

/// Fewest whitespace-separated tokens a concrete statement may have.
pub const DEFAULT_MIN_TOKENS: usize = 3;

/// A normalized, de-duplicated set of banned phrases.
///
/// Phrases are stored in normalized form (lowercase, single spaces) so
/// matching compares like with like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    phrases: Vec<String>,
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_PHRASES.iter().copied())
    }
}

impl PhraseTable {
    /// Build a table from raw phrases. Blank phrases are dropped.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        normalized.sort();
        normalized.dedup();
        Self { phrases: normalized }
    }

    /// First phrase contained in already-normalized `text`.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.phrases
            .iter()
            .find(|p| text.contains(p.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_normalized() {
        let table = PhraseTable::default();
        assert_eq!(table.len(), DEFAULT_BANNED_PHRASES.len());
        assert!(table.iter().all(|p| p == p.to_lowercase()));
    }

    #[test]
    fn test_blank_and_duplicate_phrases_dropped() {
        let table = PhraseTable::new(["  ", "Kind  Of", "kind of", ""]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next(), Some("kind of"));
    }

    #[test]
    fn test_find_in() {
        let table = PhraseTable::new(["did stuff"]);
        assert_eq!(table.find_in("i did stuff today"), Some("did stuff"));
        assert_eq!(table.find_in("i did things"), None);
    }

    #[test]
    fn test_default_table_spares_ordinary_words() {
        let table = PhraseTable::default();
        for text in [
            "refactored the data bitmap loader",
            "wrote something awesome for the parser",
            "fixed the orbit camera jitter",
        ] {
            assert_eq!(table.find_in(&normalize(text)), None, "{:?}", text);
        }
    }
}
