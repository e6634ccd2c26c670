//! Shared data models for the ViralScore backend.
//!
//! This crate provides Serde-serializable types for:
//! - Analysis requests and results
//! - Highlights and timestamp ranges
//! - Transcript truncation helpers
//! - Virality scoring models and engagement levels

pub mod analysis;
pub mod error;
pub mod highlight;
pub mod scoring;
pub mod timestamp;
pub mod transcript;
pub mod utils;

// Re-export common types
pub use analysis::{AnalysisResult, AnalyzeVideoRequest, Engagement, INVALID_VIDEO_ID_MESSAGE};
pub use error::{ModelError, ModelResult};
pub use highlight::{HighlightSet, MAX_HIGHLIGHTS};
pub use scoring::{BonusMode, EngagementLevel, ScoringModel, QUALITY_KEYWORDS};
pub use timestamp::TimeRange;
pub use transcript::Transcript;
pub use utils::{extract_youtube_id, normalize_video_id, YoutubeIdError};
