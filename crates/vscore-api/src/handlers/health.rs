//! Health check handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub scoring_model: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub llm: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Readiness check endpoint (readiness probe).
///
/// A missing model key only degrades the service, since analyses still
/// succeed with fallback highlights, so this always answers 200.
pub async fn ready(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let llm = if state.config.llm.has_api_key() {
        CheckStatus {
            status: "ok".to_string(),
            error: None,
        }
    } else {
        CheckStatus {
            status: "degraded".to_string(),
            error: Some("OPENAI_API_KEY not configured".to_string()),
        }
    };

    Json(ReadinessResponse {
        status: if llm.status == "ok" { "ready" } else { "degraded" }.to_string(),
        scoring_model: state.analyzer.scoring_model().to_string(),
        checks: ReadinessChecks { llm },
    })
}
