//! Engine configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Thresholds are inclusive lower bounds for passing: a score below the
//! threshold blocks (Gate 1) or triggers a root-cause trace (Gate 3).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::{
    PhraseTable, VagueLanguageDetector, DEFAULT_BANNED_PHRASES, DEFAULT_MIN_TOKENS,
};
use crate::model::Score;

/// Default threshold for both score gates
pub const DEFAULT_THRESHOLD: u8 = 5;

/// Raised by [`EngineConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid engine config: {0}")]
pub struct ConfigError(pub String);

/// Tunables for the gate engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gate 1: minimum state clarity to allow entry work.
    pub state_threshold: u8,
    /// Gate 3: edge scores below this require a root-cause trace.
    pub debug_threshold: u8,
    /// Fewest tokens a layer answer may have.
    pub min_tokens: usize,
    /// Phrases rejected anywhere in a layer answer.
    pub banned_phrases: Vec<String>,
    /// Run root-cause trace answers through the vague-language detector.
    pub detect_vague_debug_fields: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            state_threshold: DEFAULT_THRESHOLD,
            debug_threshold: DEFAULT_THRESHOLD,
            min_tokens: DEFAULT_MIN_TOKENS,
            banned_phrases: DEFAULT_BANNED_PHRASES.iter().map(|p| p.to_string()).collect(),
            detect_vague_debug_fields: false,
        }
    }
}

impl EngineConfig {
    /// Check ranges. Called by every loader before the config is used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("state_threshold", self.state_threshold),
            ("debug_threshold", self.debug_threshold),
        ] {
            if !(Score::MIN..=Score::MAX).contains(&value) {
                return Err(ConfigError(format!(
                    "{} must be within {}-{}, got {}",
                    name,
                    Score::MIN,
                    Score::MAX,
                    value
                )));
            }
        }

        if self.min_tokens == 0 {
            return Err(ConfigError("min_tokens must be > 0".into()));
        }

        if let Some(i) = self.banned_phrases.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigError(format!("banned_phrases[{}] is blank", i)));
        }

        Ok(())
    }

    /// Build the detector described by this config.
    pub fn detector(&self) -> VagueLanguageDetector {
        VagueLanguageDetector::new(PhraseTable::new(&self.banned_phrases), self.min_tokens)
    }
}
