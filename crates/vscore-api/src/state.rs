//! Application state.

use std::sync::Arc;

use tracing::warn;
use vscore_llm::{ChatClient, HighlightExtractor};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::services::{SimulatedTranscriptProvider, TranscriptProvider, ViralityAnalyzer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub analyzer: Arc<ViralityAnalyzer>,
}

impl AppState {
    /// Create application state with the production services.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        if !config.llm.has_api_key() {
            warn!("OPENAI_API_KEY not set; every analysis will use fallback highlights");
        }

        let client = ChatClient::new(config.llm.clone())
            .map_err(|e| ApiError::internal(format!("Failed to build model client: {}", e)))?;

        Ok(Self::with_services(
            config,
            Arc::new(SimulatedTranscriptProvider),
            Arc::new(client),
        ))
    }

    /// Create application state around caller-supplied services.
    pub fn with_services(
        config: ApiConfig,
        transcripts: Arc<dyn TranscriptProvider>,
        extractor: Arc<dyn HighlightExtractor>,
    ) -> Self {
        let analyzer = ViralityAnalyzer::new(transcripts, extractor, config.scoring_model);
        Self {
            config,
            analyzer: Arc::new(analyzer),
        }
    }
}
