//! Transcript text and its truncated views.

use serde::{Deserialize, Serialize};

/// Characters of transcript echoed back to the client.
pub const PREVIEW_CHARS: usize = 200;

/// Characters of transcript sent to the language model.
pub const PROMPT_CHARS: usize = 3000;

/// Plain-text transcript of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First [`PREVIEW_CHARS`] characters, with `...` when cut.
    pub fn preview(&self) -> String {
        truncate_with_suffix(&self.0, PREVIEW_CHARS, "...")
    }

    /// First [`PROMPT_CHARS`] characters, with `... [truncated]` when cut.
    pub fn for_prompt(&self) -> String {
        truncate_with_suffix(&self.0, PROMPT_CHARS, "... [truncated]")
    }
}

impl AsRef<str> for Transcript {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cut `text` to `max_chars` characters on a char boundary, appending `suffix` if anything was dropped.
fn truncate_with_suffix(text: &str, max_chars: usize, suffix: &str) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut out = String::with_capacity(byte_idx + suffix.len());
            out.push_str(&text[..byte_idx]);
            out.push_str(suffix);
            out
        }
        None => text.to_string(),
    }
}
