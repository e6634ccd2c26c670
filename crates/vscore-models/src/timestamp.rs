//! Timestamp ranges attached to highlights.
//!
//! Ranges are expressed in seconds from the start of the video. The model
//! sometimes returns integers and sometimes floats, so both deserialize.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum reasonable video duration (24 hours in seconds).
pub const MAX_VIDEO_DURATION_SECS: f64 = 86400.0;

/// A `{start, end}` interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimeRange {
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds
    pub end: f64,
}

impl TimeRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Whether the bounds are finite, ordered and inside a plausible video length.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.start <= self.end
            && self.end <= MAX_VIDEO_DURATION_SECS
    }

    /// Short `M:SS` label for the start offset, used by heatmap legends.
    pub fn start_label(&self) -> String {
        format_clock(self.start)
    }
}

/// Format seconds as `M:SS` (or `H:MM:SS` past the hour).
pub fn format_clock(total_secs: f64) -> String {
    let total = total_secs.max(0.0).floor() as u64;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}
