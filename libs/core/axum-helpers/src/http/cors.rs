use axum::http::{HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the given origins.
///
/// The layer allows:
/// - Methods: GET, POST, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
///
/// # Errors
/// Returns `InvalidInput` if no origins are given or an origin is not a
/// valid header value.
pub fn create_cors_layer<S: AsRef<str>>(allowed_origins: &[S]) -> io::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.as_ref().trim())
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid CORS origin '{}': {}", origin, e),
                )
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "At least one CORS origin is required",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        assert!(create_cors_layer(&["http://localhost:5173", " https://example.com "]).is_ok());
    }

    #[test]
    fn test_cors_layer_requires_an_origin() {
        let err = create_cors_layer(&["", "  "]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let empty: [&str; 0] = [];
        assert!(create_cors_layer(&empty).is_err());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let err = create_cors_layer(&["http://bad\norigin"]).unwrap_err();
        assert!(err.to_string().contains("Invalid CORS origin"));
    }
}
