/// Server error types
use crate::validation::{Schema, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Answered as `{"error": ...}`
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Answered as `{"message": ...}`; song deletion clients read this key
    #[error("Resource not found: {0}")]
    Missing(String),

    #[error("Database error: {0}")]
    Database(#[from] play_core::PlayError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

/// Client-facing text for a validation failure
pub fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField {
            schema: Schema::Song,
            field,
        } => format!(
            "Expected format: {{ name: <String>, artist_name: <String>, genre: <String>, song_rating: <Integer> }}. You're missing a \"{}\" property.",
            field
        ),
        ValidationError::MissingField {
            schema: Schema::Playlist,
            ..
        } => "Expected format: { playlist_name: <String> }.".to_string(),
        ValidationError::OutOfRange { field, value } => format!(
            "{field}: {value} is invalid. {field} must be an integer between {} and {}.",
            play_core::MIN_SONG_RATING,
            play_core::MAX_SONG_RATING,
        ),
        ValidationError::UnknownField(field) => format!("Invalid parameter field <{}>", field),
        ValidationError::WrongType {
            field,
            expected,
            value,
        } => format!("{field}: {value} is invalid. {field} must be {expected}."),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, key, message) = match self {
            ServerError::Validation(ref err) => {
                (StatusCode::BAD_REQUEST, "error", validation_message(err))
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "error", msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, "error", msg),
            ServerError::Missing(msg) => (StatusCode::NOT_FOUND, "message", msg),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Database error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error",
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({ key: message }));

        (status, body).into_response()
    }
}
