//! LLM client error types.

use thiserror::Error;

pub type LlmResult<T> = Result<T, LlmError>;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY not configured")]
    MissingApiKey,

    #[error("Model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("No response from AI model")]
    EmptyResponse,

    #[error("Failed to parse model JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Invalid response format from AI model: {0}")]
    InvalidFormat(String),
}

impl LlmError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Short label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::MissingApiKey => "missing_api_key",
            LlmError::Http(_) => "http",
            LlmError::Status { .. } => "status",
            LlmError::EmptyResponse => "empty_response",
            LlmError::MalformedJson(_) => "malformed_json",
            LlmError::InvalidFormat(_) => "invalid_format",
        }
    }
}
