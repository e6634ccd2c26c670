//! Virality analysis: transcript -> highlights -> score.

use std::sync::Arc;

use tracing::{info, warn};
use vscore_llm::HighlightExtractor;
use vscore_models::{AnalysisResult, HighlightSet, ScoringModel, Transcript};

use crate::error::ApiResult;
use crate::metrics;
use crate::services::TranscriptProvider;

/// Orchestrates one analysis request.
#[derive(Clone)]
pub struct ViralityAnalyzer {
    transcripts: Arc<dyn TranscriptProvider>,
    extractor: Arc<dyn HighlightExtractor>,
    scoring: ScoringModel,
}

impl ViralityAnalyzer {
    pub fn new(
        transcripts: Arc<dyn TranscriptProvider>,
        extractor: Arc<dyn HighlightExtractor>,
        scoring: ScoringModel,
    ) -> Self {
        Self {
            transcripts,
            extractor,
            scoring,
        }
    }

    pub fn scoring_model(&self) -> ScoringModel {
        self.scoring
    }

    /// Analyze a validated video id.
    ///
    /// Transcript failures propagate; model failures degrade to
    /// [`HighlightSet::fallback`].
    pub async fn analyze(&self, video_id: &str) -> ApiResult<AnalysisResult> {
        let transcript = self.transcripts.fetch_transcript(video_id).await?;
        let (highlights, degraded) = self.highlights_or_fallback(&transcript).await;
        let score = self.scoring.score(&highlights.highlights);

        metrics::record_analysis(self.scoring.name, degraded, score);

        info!(
            video_id = %video_id,
            score,
            highlights = highlights.len(),
            starts = ?highlights.start_labels(),
            degraded,
            scoring_model = %self.scoring,
            "Analysis complete"
        );

        Ok(AnalysisResult::new(video_id, &transcript, highlights, score))
    }

    async fn highlights_or_fallback(&self, transcript: &Transcript) -> (HighlightSet, bool) {
        match self.extractor.extract_highlights(transcript).await {
            Ok(set) => (set, false),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "AI analysis failed, using fallback highlights");
                metrics::record_llm_fallback(e.kind());
                (HighlightSet::fallback(), true)
            }
        }
    }
}
