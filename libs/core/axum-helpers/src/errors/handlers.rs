use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        ErrorCode::NotFound,
        "NotFound",
        ErrorCode::NotFound.default_message(),
    )
    .into_response_with(StatusCode::NOT_FOUND)
}

