//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "InternalServerError",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "BadRequest",
        "message": "Request validation failed",
        "details": {
            "page_count": [{
                "code": "range",
                "message": "Page count must be between 1 and 100; contact us directly for larger sites",
                "params": {"min": 1.0, "max": 100.0, "value": 150}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);
