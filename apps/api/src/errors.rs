use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::questionnaire::engine::EngineError;
use crate::recommendation::board::BoardError;
use crate::recommendation::requester::RecommendationError;

/// Where a client is sent when it reaches the results without answers.
pub const QUESTIONNAIRE_START: &str = "/api/v1/questions";

/// Shown for every failed recommendation fetch, whatever the cause.
pub(crate) const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Failed to generate career predictions. Please try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Answers have not been submitted for this session")]
    MissingNavigationState,

    #[error("Generative service failure: {0}")]
    Transport(String),

    #[error("Malformed generative service response: {0}")]
    MalformedResponse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownOption { .. } => AppError::Validation(err.to_string()),
            EngineError::AlreadySubmitted => AppError::Conflict(err.to_string()),
            EngineError::EmptyCatalog => AppError::Internal(anyhow::Error::new(err)),
        }
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::CareerOutOfRange(_) => AppError::NotFound(err.to_string()),
            BoardError::AlreadyLoading
            | BoardError::NotReady
            | BoardError::AlreadyDetailed(_)
            | BoardError::DetailBusy { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::Transport(e) => AppError::Transport(e.to_string()),
            RecommendationError::MalformedResponse(msg) => AppError::MalformedResponse(msg),
            RecommendationError::Prompt(e) => AppError::Internal(anyhow::Error::new(e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::MissingNavigationState => (
                StatusCode::SEE_OTHER,
                "MISSING_NAVIGATION_STATE",
                "Complete the questionnaire before viewing results".to_string(),
            ),
            AppError::Transport(msg) => {
                tracing::warn!("Generative service failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RECOMMENDATION_FAILED",
                    RECOMMENDATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::MalformedResponse(msg) => {
                tracing::warn!("Malformed generative service response: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RECOMMENDATION_FAILED",
                    RECOMMENDATION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        if matches!(self, AppError::MissingNavigationState) {
            return (status, [(header::LOCATION, QUESTIONNAIRE_START)], body).into_response();
        }

        (status, body).into_response()
    }
}
