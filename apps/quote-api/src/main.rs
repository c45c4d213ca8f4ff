use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

/// Assemble the full application: documented API under `/api` plus `/health`.
fn app(config: &Config) -> eyre::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes(), &config.cors.allowed_origins)?;

    Ok(router.merge(health_router(config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let app = app(&config)?;

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting quote API"
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Quote API shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{Environment, app_info, cors::CorsConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            app: app_info!(),
            server: ServerConfig::default(),
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
            },
            environment: Environment::Development,
        }
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_through_full_stack() {
        let app = app(&test_config()).unwrap();

        let request = Request::builder()
            .method("POST")
            .uri("/api/quotes/calculate")
            .header("content-type", "application/json")
            .header("origin", "http://localhost:5173")
            .body(Body::from(
                json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "website_type": "ecommerce",
                    "design_complexity": "premium",
                    "page_count": 5,
                    "features": {
                        "user_accounts": true,
                        "payment_processing": true,
                        "content_management": true,
                        "responsive_design": false
                    },
                    "timeline": "standard"
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");

        let body = json_body(response.into_body()).await;
        assert_eq!(body["quote"]["total_price"], 10400);
        assert_eq!(body["quote"]["estimated_time_in_weeks"], 8);
        assert_eq!(body["summary"]["website_type"], "E-commerce Website");
    }

    #[tokio::test]
    async fn test_health_and_docs_are_mounted() {
        let app = app(&test_config()).unwrap();

        let response = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["name"], "quote_api");

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc = json_body(response.into_body()).await;
        assert!(doc["paths"].get("/quotes/calculate").is_some(), "{doc}");
        assert!(doc["paths"].get("/quotes/options").is_some(), "{doc}");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let app = app(&test_config()).unwrap();

        let response = app
            .oneshot(Request::get("/api/quotes/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], "NotFound");
    }
}
