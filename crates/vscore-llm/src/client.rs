//! OpenAI-compatible chat-completion client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vscore_models::{HighlightSet, Transcript};

use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};
use crate::prompt::{parse_highlights, user_prompt, SYSTEM_PROMPT};
use crate::HighlightExtractor;

/// Chat-completion client.
#[derive(Clone)]
pub struct ChatClient {
    config: LlmConfig,
    client: Client,
}

/// Chat-completion request.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    response_format: ResponseFormat,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat-completion response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl ChatClient {
    /// Create a new client.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Send a system/user message pair and return the first choice's content.
    pub async fn complete_json(&self, system: &str, user: &str) -> LlmResult<String> {
        let api_key = self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, "Sending chat completion request");

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let chat: ChatResponse = response.json().await?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl HighlightExtractor for ChatClient {
    async fn extract_highlights(&self, transcript: &Transcript) -> LlmResult<HighlightSet> {
        let content = self
            .complete_json(SYSTEM_PROMPT, &user_prompt(transcript))
            .await?;
        let set = parse_highlights(&content)?;

        info!(
            model = %self.config.model,
            highlights = set.len(),
            timestamps = set.timestamps.len(),
            "Extracted highlights from model"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    fn client_for(server: &MockServer) -> ChatClient {
        let config = LlmConfig::default()
            .with_base_url(server.uri())
            .with_api_key("test-key");
        ChatClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_extract_highlights_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4-turbo",
                "response_format": { "type": "json_object" },
                "max_tokens": 500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(
                r#"{"highlights": ["Amazing reveal", "Secret tip"], "timestamps": [{"start": 0, "end": 30}, {"start": 45, "end": 60}]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let set = client_for(&server)
            .extract_highlights(&Transcript::new("some transcript"))
            .await
            .unwrap();

        assert_eq!(set.highlights, vec!["Amazing reveal", "Secret tip"]);
        assert_eq!(set.timestamps.len(), 2);
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .extract_highlights(&Transcript::new("t"))
            .await
            .unwrap_err();

        match err {
            LlmError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_model_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("{not json")))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .extract_highlights(&Transcript::new("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MalformedJson(_)));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .extract_highlights(&Transcript::new("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_missing_api_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ChatClient::new(LlmConfig::default().with_base_url(server.uri())).unwrap();
        let err = client
            .extract_highlights(&Transcript::new("t"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
