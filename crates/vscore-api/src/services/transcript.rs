//! Transcript retrieval.
//!
//! Only a simulated provider ships today; a real caption service plugs in
//! behind [`TranscriptProvider`].

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use vscore_models::Transcript;

/// Failures a caption-backed provider reports.
///
/// The simulated provider never fails; real integrations return these.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The video has no usable captions.
    #[error("Transcript not available for video {0}")]
    NotAvailable(String),

    /// The caption service could not be reached or answered with an error.
    #[error("Transcript service failed: {0}")]
    Upstream(String),
}

/// Source of video transcripts.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, TranscriptError>;
}

/// Returns a fixed, roughly three-minute transcript for any video id.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTranscriptProvider;

#[async_trait]
impl TranscriptProvider for SimulatedTranscriptProvider {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, TranscriptError> {
        debug!(video_id = %video_id, "Serving simulated transcript");

        Ok(Transcript::new(format!(
            "This is a simulated transcript for YouTube video {video_id}.\n\
             [00:00-00:30] Introduction to the video content and what viewers can expect.\n\
             [00:30-01:45] Main content section with key insights and demonstrations.\n\
             [01:45-02:30] Interesting findings that surprised even the creator.\n\
             [02:30-03:00] Conclusion and call to action for viewers to like and subscribe.\n\
             \n\
             A live integration would replace this text with the actual captions fetched \
             from YouTube or a third-party caption service. The transcript length is \
             approximately 3 minutes."
        )))
    }
}
