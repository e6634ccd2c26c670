//! Analysis request/response models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ModelError, ModelResult};
use crate::highlight::HighlightSet;
use crate::scoring::EngagementLevel;
use crate::timestamp::TimeRange;
use crate::transcript::Transcript;
use crate::utils::normalize_video_id;

/// Message returned for any unusable video id.
pub const INVALID_VIDEO_ID_MESSAGE: &str = "Valid YouTube video ID is required (min 8 characters)";

/// Request body for `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeVideoRequest {
    /// YouTube video id, or a YouTube URL containing one
    #[serde(default)]
    #[validate(length(min = 8, message = "Valid YouTube video ID is required (min 8 characters)"))]
    pub video_id: String,
}

impl AnalyzeVideoRequest {
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
        }
    }

    /// Validate the request and return the canonical video id.
    ///
    /// Surrounding whitespace is ignored and YouTube URLs are reduced to
    /// their id before the length check.
    pub fn into_video_id(self) -> ModelResult<String> {
        let normalized = Self {
            video_id: normalize_video_id(&self.video_id)
                .map_err(|_| ModelError::invalid_video_id(INVALID_VIDEO_ID_MESSAGE))?,
        };

        normalized
            .validate()
            .map_err(|_| ModelError::invalid_video_id(INVALID_VIDEO_ID_MESSAGE))?;

        Ok(normalized.video_id)
    }
}

/// Engagement label and its one-line summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Engagement {
    pub level: EngagementLevel,
    pub summary: String,
}

impl Engagement {
    pub fn from_score(score: u32) -> Self {
        let level = EngagementLevel::from_score(score);
        Self {
            level,
            summary: level.summary().to_string(),
        }
    }
}

/// Successful analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub video_id: String,
    /// Start of the transcript, truncated for display
    pub transcript_preview: String,
    pub highlights: Vec<String>,
    pub timestamps: Vec<TimeRange>,
    /// Virality score in `0..=100`
    pub score: u32,
    pub engagement: Engagement,
}

impl AnalysisResult {
    pub fn new(
        video_id: impl Into<String>,
        transcript: &Transcript,
        highlights: HighlightSet,
        score: u32,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            transcript_preview: transcript.preview(),
            highlights: highlights.highlights,
            timestamps: highlights.timestamps,
            score,
            engagement: Engagement::from_score(score),
        }
    }
}
