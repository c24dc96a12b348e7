//! Error types for pingpong-server-db

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Response body carries the driver's own message; the prefixed
        // Display form is for logs only.
        let message = match &self {
            ApiError::Database(err) => {
                tracing::error!("database error: {}", err);
                err.to_string()
            }
        };

        let body = Json(ErrorBody { error: message });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
