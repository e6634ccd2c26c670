//! API integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vscore_api::services::TranscriptError;
use vscore_api::{create_router, ApiConfig, AppState, SimulatedTranscriptProvider, TranscriptProvider};
use vscore_llm::{ChatClient, HighlightExtractor, LlmConfig, LlmError, LlmResult};
use vscore_models::{HighlightSet, TimeRange, Transcript, INVALID_VIDEO_ID_MESSAGE};

/// Returns the given highlights, or an empty model response when `None`.
struct StubExtractor(Option<HighlightSet>);

#[async_trait]
impl HighlightExtractor for StubExtractor {
    async fn extract_highlights(&self, _transcript: &Transcript) -> LlmResult<HighlightSet> {
        self.0.clone().ok_or(LlmError::EmptyResponse)
    }
}

struct FailingTranscripts;

#[async_trait]
impl TranscriptProvider for FailingTranscripts {
    async fn fetch_transcript(&self, _video_id: &str) -> Result<Transcript, TranscriptError> {
        Err(TranscriptError::Upstream("caption service unreachable".to_string()))
    }
}

fn model_highlights() -> HighlightSet {
    HighlightSet::new(
        vec![
            "Amazing reveal at start".to_string(),
            "Step-by-step walkthrough".to_string(),
        ],
        vec![TimeRange::new(0.0, 20.0), TimeRange::new(40.0, 75.0)],
    )
}

fn router_with(
    config: ApiConfig,
    transcripts: Arc<dyn TranscriptProvider>,
    extractor: Arc<dyn HighlightExtractor>,
) -> Router {
    create_router(AppState::with_services(config, transcripts, extractor), None)
}

fn create_test_router() -> Router {
    router_with(
        ApiConfig::default(),
        Arc::new(SimulatedTranscriptProvider),
        Arc::new(StubExtractor(Some(model_highlights()))),
    )
}

fn analyze_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Test health endpoint.
#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_missing_key() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["scoring_model"], "standard");
    assert_eq!(body["checks"]["llm"]["status"], "degraded");
}

#[tokio::test]
async fn test_metrics_disabled_is_not_found() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analyze_success() {
    let response = create_test_router()
        .oneshot(analyze_request(r#"{"videoId": "dQw4w9WgXcQ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = json_body(response).await;
    assert_eq!(body["videoId"], "dQw4w9WgXcQ");
    assert_eq!(body["highlights"][0], "Amazing reveal at start");
    assert_eq!(body["timestamps"][1]["start"], 40.0);
    // base 2 * 20 = 40, "amazing" + "reveal" = 10
    assert_eq!(body["score"], 50);
    assert_eq!(body["engagement"]["level"], "Average");

    let preview = body["transcriptPreview"].as_str().unwrap();
    assert!(preview.starts_with("This is a simulated transcript for YouTube video dQw4w9WgXcQ."));
    assert!(preview.ends_with("..."));
}

#[tokio::test]
async fn test_analyze_accepts_youtube_url() {
    let response = create_test_router()
        .oneshot(analyze_request(
            r#"{"videoId": "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["videoId"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_analyze_rejects_bad_input() {
    let bad_bodies = [
        r#"{"videoId": ""}"#,
        r#"{"videoId": "short"}"#,
        r#"{"videoId": 12345678}"#,
        r#"{}"#,
        r#"{"videoId": "#,
        "",
    ];

    for raw in bad_bodies {
        let response = create_test_router()
            .oneshot(analyze_request(raw))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {raw}");
        let body = json_body(response).await;
        assert_eq!(body["error"], INVALID_VIDEO_ID_MESSAGE, "body: {raw}");
    }
}

#[tokio::test]
async fn test_analyze_drops_invalid_model_timestamps() {
    let set = HighlightSet::new(
        vec!["Shocking secret".to_string()],
        vec![TimeRange::new(-50.0, -100.0), TimeRange::new(5.0, 15.0)],
    );
    let app = router_with(
        ApiConfig::default(),
        Arc::new(SimulatedTranscriptProvider),
        Arc::new(StubExtractor(Some(set))),
    );

    let response = app
        .oneshot(analyze_request(r#"{"videoId": "dQw4w9WgXcQ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["timestamps"], json!([{ "start": 5.0, "end": 15.0 }]));
}

#[tokio::test]
async fn test_analyze_model_failure_uses_fallback() {
    let app = router_with(
        ApiConfig::default(),
        Arc::new(SimulatedTranscriptProvider),
        Arc::new(StubExtractor(None)),
    );

    let response = app
        .oneshot(analyze_request(r#"{"videoId": "dQw4w9WgXcQ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let fallback = HighlightSet::fallback();
    assert_eq!(body["highlights"], json!(fallback.highlights));
    assert_eq!(body["timestamps"].as_array().unwrap().len(), 3);
    assert_eq!(body["score"], 70);
}

#[tokio::test]
async fn test_analyze_malformed_upstream_json_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Sure! Here are highlights" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let llm = LlmConfig::default()
        .with_base_url(server.uri())
        .with_api_key("test-key");
    let config = ApiConfig {
        scoring_model: "conservative".parse().unwrap(),
        llm: llm.clone(),
        ..ApiConfig::default()
    };

    let app = router_with(
        config,
        Arc::new(SimulatedTranscriptProvider),
        Arc::new(ChatClient::new(llm).unwrap()),
    );

    let response = app
        .oneshot(analyze_request(r#"{"videoId": "dQw4w9WgXcQ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["highlights"].as_array().unwrap().len(), 3);
    // 3 * 15 = 45, one highlight with keywords
    assert_eq!(body["score"], 50);
}

#[tokio::test]
async fn test_analyze_transcript_failure_is_500() {
    let app = router_with(
        ApiConfig::default(),
        Arc::new(FailingTranscripts),
        Arc::new(StubExtractor(Some(model_highlights()))),
    );

    let response = app
        .oneshot(analyze_request(r#"{"videoId": "dQw4w9WgXcQ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Analysis failed"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn test_schema_endpoint() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/api/schema").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["request"]["properties"]["videoId"].is_object());
    assert!(body["response"]["properties"]["score"].is_object());
}

/// Test rate limiting.
#[tokio::test]
async fn test_rate_limiting() {
    let config = ApiConfig {
        rate_limit_rps: 1,
        ..ApiConfig::default()
    };
    let app = router_with(
        config,
        Arc::new(SimulatedTranscriptProvider),
        Arc::new(StubExtractor(Some(model_highlights()))),
    );

    let send = |app: Router| async move {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze")
                .header("content-type", "application/json")
                .header("x-forwarded-for", "192.168.1.100")
                .body(Body::from(r#"{"videoId": "dQw4w9WgXcQ"}"#))
                .unwrap(),
        )
        .await
        .unwrap()
    };

    let first = send(app.clone()).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = send(app.clone()).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(second.headers()["retry-after"], "1");
}
