//! Video analysis handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::Serialize;
use tracing::{debug, info};
use vscore_models::{AnalysisResult, AnalyzeVideoRequest, INVALID_VIDEO_ID_MESSAGE};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Analyze a video and return its virality score.
///
/// Malformed bodies are reported with the same message as a bad id so
/// clients only have one 400 shape to handle.
pub async fn analyze_video(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeVideoRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejected analyze request body");
        ApiError::bad_request(INVALID_VIDEO_ID_MESSAGE)
    })?;

    let video_id = request.into_video_id()?;
    info!(video_id = %video_id, "Starting analysis");

    let result = state.analyzer.analyze(&video_id).await?;
    Ok(Json(result))
}

/// JSON schemas for the analyze endpoint.
#[derive(Serialize)]
pub struct AnalyzeSchemas {
    pub request: RootSchema,
    pub response: RootSchema,
}

/// Describe the analyze request/response bodies.
pub async fn analyze_schema() -> Json<AnalyzeSchemas> {
    Json(AnalyzeSchemas {
        request: schema_for!(AnalyzeVideoRequest),
        response: schema_for!(AnalysisResult),
    })
}
