//! YouTube id extraction.
//!
//! Clients are expected to send a bare video id, but pasting a full URL is
//! common enough that the id is pulled out of it here.

use thiserror::Error;
use url::Url;

/// Length of a canonical YouTube video id.
pub const YOUTUBE_ID_LEN: usize = 11;

/// Errors that can occur during YouTube id extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum YoutubeIdError {
    #[error("URL is not a valid YouTube URL")]
    InvalidYoutubeUrl,

    #[error("Video ID has invalid format")]
    InvalidVideoId,

    #[error("Video ID not found in URL")]
    VideoIdNotFound,
}

/// Extract the 11-character video id from a YouTube URL.
///
/// Supports `watch?v=`, `youtu.be/`, `/embed/`, `/v/`, `/shorts/` and
/// `/live/` forms, with or without a scheme.
pub fn extract_youtube_id(input: &str) -> Result<String, YoutubeIdError> {
    let input = input.trim();
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&with_scheme).map_err(|_| YoutubeIdError::InvalidYoutubeUrl)?;
    let host = url
        .host_str()
        .map(|h| h.to_ascii_lowercase())
        .ok_or(YoutubeIdError::InvalidYoutubeUrl)?;

    let candidate = if host == "youtu.be" {
        url.path_segments().and_then(|mut s| s.next()).map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        let from_query = url
            .query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned());

        from_query.or_else(|| {
            let segments: Vec<&str> = url.path_segments()?.collect();
            match segments.as_slice() {
                ["embed" | "v" | "shorts" | "live", id, ..] => Some(id.to_string()),
                _ => None,
            }
        })
    } else {
        return Err(YoutubeIdError::InvalidYoutubeUrl);
    };

    let id = candidate
        .filter(|id| !id.is_empty())
        .ok_or(YoutubeIdError::VideoIdNotFound)?;
    validate_youtube_id(id)
}

/// Reduce user input to a video id: trimmed ids pass through, URLs are parsed.
pub fn normalize_video_id(input: &str) -> Result<String, YoutubeIdError> {
    let trimmed = input.trim();
    if looks_like_url(trimmed) {
        extract_youtube_id(trimmed)
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_url(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.contains("://")
        || lower.starts_with("www.")
        || lower.starts_with("youtube.com")
        || lower.starts_with("m.youtube.com")
        || lower.starts_with("youtu.be")
}

fn validate_youtube_id(id: String) -> Result<String, YoutubeIdError> {
    let well_formed = id.len() == YOUTUBE_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if well_formed {
        Ok(id)
    } else {
        Err(YoutubeIdError::InvalidVideoId)
    }
}
