use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::flows::FlowError;
use crate::gateway::GatewayError;
use crate::guidance::quiz::QuizError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Oracle unavailable: {0}")]
    OracleUnavailable(String),

    #[error("Invalid oracle reply: {0}")]
    InvalidOracleReply(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Precondition { .. } => AppError::Validation(err.to_string()),
            GatewayError::Transport { .. } => AppError::OracleUnavailable(err.to_string()),
            GatewayError::Validation { .. } => AppError::InvalidOracleReply(err.to_string()),
        }
    }
}

impl From<FlowError> for AppError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::UnknownFlow(_) => AppError::NotFound(err.to_string()),
            FlowError::InvalidRequest { .. } | FlowError::MissingFields { .. } => {
                AppError::Validation(err.to_string())
            }
            FlowError::Gateway(inner) => inner.into(),
            FlowError::Serialize(e) => {
                AppError::Internal(anyhow::anyhow!("Failed to serialize flow response: {e}"))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
            _ => AppError::Validation(format!("Invalid request body: {}", rejection.body_text())),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::UnknownAudience(_) => AppError::NotFound(err.to_string()),
            _ => AppError::Validation(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::OracleUnavailable(msg) => {
                tracing::error!("Oracle unavailable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ORACLE_UNAVAILABLE",
                    "The AI service could not be reached. Please try again.".to_string(),
                )
            }
            AppError::InvalidOracleReply(msg) => {
                tracing::error!("Invalid oracle reply: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INVALID_ORACLE_REPLY",
                    "The AI service returned an unusable answer. Please try again.".to_string(),
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

        (status, body).into_response()
    }
}
