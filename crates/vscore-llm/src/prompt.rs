//! Prompt text and model-answer parsing for highlight extraction.

use serde::Deserialize;
use vscore_models::{HighlightSet, TimeRange, Transcript};

use crate::error::{LlmError, LlmResult};

pub const SYSTEM_PROMPT: &str = r#"You are a YouTube content analyst. Extract 3-5 engaging highlights with timestamps from video transcripts.
Respond ONLY with valid JSON: { "highlights": ["highlight1", ...], "timestamps": [{"start": 0, "end": 30}, ...] }"#;

/// Build the user message for a transcript.
pub fn user_prompt(transcript: &Transcript) -> String {
    format!(
        "Analyze this YouTube video transcript:\n\n{}",
        transcript.for_prompt()
    )
}

#[derive(Debug, Deserialize)]
struct RawHighlights {
    highlights: Option<Vec<String>>,
    timestamps: Option<Vec<TimeRange>>,
}

/// Parse the model's JSON answer into a highlight set.
///
/// Both `highlights` and `timestamps` must be present; extra entries past the
/// fifth are dropped.
pub fn parse_highlights(content: &str) -> LlmResult<HighlightSet> {
    let raw: RawHighlights = serde_json::from_str(strip_code_fence(content))?;

    match (raw.highlights, raw.timestamps) {
        (Some(highlights), Some(timestamps)) => Ok(HighlightSet::new(highlights, timestamps)),
        (None, _) => Err(LlmError::invalid_format("missing `highlights`")),
        (_, None) => Err(LlmError::invalid_format("missing `timestamps`")),
    }
}

/// Strip a surrounding ```` ```json ```` / ```` ``` ```` fence if the model added one.
fn strip_code_fence(content: &str) -> &str {
    let text = content.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
