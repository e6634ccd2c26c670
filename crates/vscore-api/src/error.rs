//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use vscore_models::ModelError;

use crate::config::is_production_env;
use crate::services::TranscriptError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) | ApiError::Transcript(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidVideoId(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ApiError::BadRequest(msg) | ApiError::Validation(msg) => ErrorResponse {
                error: msg.clone(),
                details: None,
            },
            ApiError::RateLimited => ErrorResponse {
                error: "Rate limit exceeded. Please try again later.".to_string(),
                details: None,
            },
            _ => {
                error!(error = ?self, "Analysis error");

                // Don't expose internal error details in production
                let production =
                    std::env::var("ENVIRONMENT").is_ok_and(|env| is_production_env(&env));
                if production {
                    ErrorResponse {
                        error: "Analysis failed: Internal server error".to_string(),
                        details: None,
                    }
                } else {
                    ErrorResponse {
                        error: format!("Analysis failed: {}", self),
                        details: Some(format!("{:?}", self)),
                    }
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
