use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use model::response::ErrorResponse;

/// Handler-boundary error. Every variant renders the uniform
/// `{success: false, error}` envelope; the message is the client-facing
/// text, so handlers choose it per resource.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required field is missing or out of bounds
    #[error("{0}")]
    Validation(String),
    /// A unique constraint was violated
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
