//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The body shape is always `{"error": <message>}`; database causes are
//! logged server-side and never leak into the response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Input validation failed (400)
    Validation(ValidationError),

    /// The value or its predecessor is already recorded (400)
    Conflict { value: i64 },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            Self::Conflict { value } => {
                tracing::error!("Number {} already exists.", value);
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": format!("Number {} already exists.", value) }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return a generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
