//! Highlight models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamp::TimeRange;

/// Upper bound on highlights and timestamps carried in a result.
pub const MAX_HIGHLIGHTS: usize = 5;

const FALLBACK_HIGHLIGHTS: [&str; 3] = [
    "Engaging introduction that hooks viewers immediately",
    "Key demonstration at 1:30 that shows practical application",
    "Surprising reveal at 2:15 that increases shareability",
];

const FALLBACK_TIMESTAMPS: [TimeRange; 3] = [
    TimeRange::new(0.0, 30.0),
    TimeRange::new(90.0, 110.0),
    TimeRange::new(135.0, 150.0),
];

/// Highlights extracted from a transcript, with their timestamp ranges.
///
/// The two lists are positionally related but not required to have equal
/// length; the model is free to return fewer timestamps than highlights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HighlightSet {
    /// Short descriptions of notable moments
    pub highlights: Vec<String>,
    /// Timestamp ranges for the highlights
    pub timestamps: Vec<TimeRange>,
}

impl HighlightSet {
    /// Build a set, keeping at most [`MAX_HIGHLIGHTS`] entries of each list.
    ///
    /// Ranges failing [`TimeRange::is_valid`] are dropped before truncation.
    pub fn new(mut highlights: Vec<String>, mut timestamps: Vec<TimeRange>) -> Self {
        highlights.truncate(MAX_HIGHLIGHTS);
        timestamps.retain(TimeRange::is_valid);
        timestamps.truncate(MAX_HIGHLIGHTS);
        Self {
            highlights,
            timestamps,
        }
    }

    /// The fixed set returned when the model call fails.
    pub fn fallback() -> Self {
        Self {
            highlights: FALLBACK_HIGHLIGHTS.iter().map(|h| h.to_string()).collect(),
            timestamps: FALLBACK_TIMESTAMPS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }

    /// Start labels for every timestamp, in order.
    pub fn start_labels(&self) -> Vec<String> {
        self.timestamps.iter().map(TimeRange::start_label).collect()
    }
}
