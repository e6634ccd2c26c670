//! Virality scoring.
//!
//! The score is a weighted highlight count plus a keyword bonus, clamped to a
//! model-specific band:
//!
//! ```text
//! base  = min(count * per_highlight_weight, base_cap)
//! bonus = 5 * keyword hits
//! score = clamp(base + bonus, floor, ceiling)
//! ```

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Words that mark a highlight as high-quality hook material.
pub const QUALITY_KEYWORDS: [&str; 5] = ["surprising", "secret", "amazing", "shocking", "reveal"];

/// Points awarded per keyword hit.
pub const KEYWORD_BONUS: u32 = 5;

/// How keyword hits are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusMode {
    /// Every distinct keyword found in a highlight earns a bonus.
    PerKeyword,
    /// A highlight earns one bonus if it contains any keyword.
    PerHighlight,
}

/// Weights and bounds for a scoring variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringModel {
    pub name: &'static str,
    pub per_highlight_weight: u32,
    pub base_cap: u32,
    pub floor: u32,
    pub ceiling: u32,
    pub bonus_mode: BonusMode,
}

impl ScoringModel {
    /// 20 points per highlight up to 80, full 0..=100 band.
    pub const STANDARD: Self = Self {
        name: "standard",
        per_highlight_weight: 20,
        base_cap: 80,
        floor: 0,
        ceiling: 100,
        bonus_mode: BonusMode::PerKeyword,
    };

    /// 15 points per highlight up to 75, squeezed into 20..=95.
    pub const CONSERVATIVE: Self = Self {
        name: "conservative",
        per_highlight_weight: 15,
        base_cap: 75,
        floor: 20,
        ceiling: 95,
        bonus_mode: BonusMode::PerHighlight,
    };

    /// Score a list of highlights.
    pub fn score<S: AsRef<str>>(&self, highlights: &[S]) -> u32 {
        let count = u32::try_from(highlights.len()).unwrap_or(u32::MAX);
        let base = count
            .saturating_mul(self.per_highlight_weight)
            .min(self.base_cap);

        let bonus: u32 = highlights
            .iter()
            .map(|h| self.keyword_hits(h.as_ref()) * KEYWORD_BONUS)
            .sum();

        base.saturating_add(bonus).clamp(self.floor, self.ceiling)
    }

    fn keyword_hits(&self, highlight: &str) -> u32 {
        let lowered = highlight.to_lowercase();
        let hits = QUALITY_KEYWORDS
            .iter()
            .filter(|kw| lowered.contains(*kw))
            .count() as u32;

        match self.bonus_mode {
            BonusMode::PerKeyword => hits,
            BonusMode::PerHighlight => hits.min(1),
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl FromStr for ScoringModel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::STANDARD),
            "conservative" => Ok(Self::CONSERVATIVE),
            other => Err(ModelError::UnknownScoringModel(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Coarse label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EngagementLevel {
    Excellent,
    Good,
    Average,
    Low,
}

impl EngagementLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 80 => Self::Excellent,
            s if s > 60 => Self::Good,
            s if s > 40 => Self::Average,
            _ => Self::Low,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Excellent => "High viral potential",
            Self::Good => "Good engagement opportunities",
            Self::Average => "Moderate viral chance",
            Self::Low => "Needs improvement",
        }
    }
}
