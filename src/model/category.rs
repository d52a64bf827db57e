//! The fixed set of daily entry categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entry category. A day holds at most one entry per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Time for self
    #[serde(rename = "self")]
    SelfTime,
    /// Exercise, 45+ minutes
    Exercise,
    /// Quality family time
    Family,
    /// Study, 60+ minutes
    Study,
    /// Focused work, 90+ minutes
    Work,
}

/// Raised when a label names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected one of: self, exercise, family, study, work)")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::SelfTime,
        Category::Exercise,
        Category::Family,
        Category::Study,
        Category::Work,
    ];

    /// Stable label, identical to the on-disk key.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SelfTime => "self",
            Category::Exercise => "exercise",
            Category::Family => "family",
            Category::Study => "study",
            Category::Work => "work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
