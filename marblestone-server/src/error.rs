use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Handler-boundary error type. Variants map one-to-one to the response
/// shapes the API has always produced: some routes answer JSON strings,
/// some `{"message": ...}` objects, some plain text, and two routes
/// historically answered nothing at all (`Silent`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    InternalMessage(String),

    #[error("{0}")]
    InternalText(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("internal error")]
    Silent,

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // A bare JSON string body: what these routes have always sent.
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Value::String(msg)),
            )
                .into_response(),
            AppError::InternalMessage(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": msg })),
            )
                .into_response(),
            AppError::InternalText(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                Json(json!({ "message": msg })),
            )
                .into_response(),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                Json(Value::String(msg)),
            )
                .into_response(),
            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": msg })),
            )
                .into_response(),
            // The error has already been logged at the failure site; this
            // response carries no body.
            AppError::Silent => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            AppError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database error", "details": err.to_string() })),
            )
                .into_response(),
            AppError::InvalidToken(_) => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Invalid token" })),
            )
                .into_response(),
            AppError::Config(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Configuration error", "details": err.to_string() })),
            )
                .into_response(),
            AppError::Io(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error", "details": err.to_string() })),
            )
                .into_response(),
        }
    }
}
