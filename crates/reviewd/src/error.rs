use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use reviewd_core::storage::{repository_error_to_status_code, RepositoryError};

/// Failures a request handler can surface, each with a dedicated response
/// mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more field violations, always reported together.
    #[error("validation failed")]
    Validation(Vec<String>),
    /// The request body is not syntactically valid JSON.
    #[error("invalid request body format : {0:?}")]
    MalformedBody(String),
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,
    /// Everything else. Surfaced with its mapped server-side status, never
    /// disguised as a client error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("invalid request body format : \"{message}\"")
                })),
            )
                .into_response(),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
            }
            ApiError::Repository(error) => {
                tracing::error!(error = %error, "Repository failure");
                let status = StatusCode::from_u16(repository_error_to_status_code(&error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, error.to_string()).into_response()
            }
        }
    }
}
