//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor with automatic validation.
///
/// Deserializes the body with axum's [`Json`] (whose rejections pass through
/// unchanged: 400 for syntax errors, 422 for shape errors, 415 for a missing
/// content type), then runs [`Validate`]. Failed validation returns 400 with
/// per-field details.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Signup {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn signup(ValidatedJson(payload): ValidatedJson<Signup>) -> String {
///     format!("Welcome {}", payload.email)
/// }
///
/// let app = Router::new().route("/signup", post(signup));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(
                error_code = ErrorCode::JsonExtraction.code(),
                "JSON extraction error: {}",
                e.body_text()
            );
            e.into_response()
        })?;

        data.validate().map_err(|e| {
            tracing::info!(
                error_code = ErrorCode::ValidationError.code(),
                "Validation error: {}",
                e
            );
            ErrorResponse::new(
                ErrorCode::ValidationError,
                "BadRequest",
                ErrorCode::ValidationError.default_message(),
            )
            .with_details(field_error_details(&e))
            .into_response_with(StatusCode::BAD_REQUEST)
        })?;

        Ok(ValidatedJson(data))
    }
}

/// Map field errors to `{ field: [{ code, message, params }] }`
fn field_error_details(errors: &ValidationErrors) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}
