use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorCode, ErrorResponse};
use thiserror::Error;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors raised before a quote can be computed
///
/// The pricing engine itself cannot fail; these cover raw input that does not
/// describe a valid project.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IntoResponse for QuoteError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            QuoteError::InvalidInput(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidInput),
        };

        tracing::info!(
            status = status.as_u16(),
            error_code = code.code(),
            "Quote request rejected: {}",
            self
        );

        ErrorResponse::new(code, "BadRequest", self.to_string()).into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_invalid_input_maps_to_bad_request() {
        let response =
            QuoteError::InvalidInput("page_count must be at least 1, got 0".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, ErrorCode::InvalidInput.code());
        assert_eq!(body.error, "BadRequest");
        assert_eq!(
            body.message,
            "Invalid input: page_count must be at least 1, got 0"
        );
        assert!(body.details.is_none());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = QuoteError::InvalidInput("page_count must be at least 1, got 0".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: page_count must be at least 1, got 0"
        );
    }
}
