//! Language-model client for highlight extraction.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint and turns the
//! model's JSON answer into a [`vscore_models::HighlightSet`].

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

use async_trait::async_trait;
use vscore_models::{HighlightSet, Transcript};

pub use client::ChatClient;
pub use config::LlmConfig;
pub use error::{LlmError, LlmResult};

/// Anything that can pull highlights out of a transcript.
#[async_trait]
pub trait HighlightExtractor: Send + Sync {
    async fn extract_highlights(&self, transcript: &Transcript) -> LlmResult<HighlightSet>;
}
