use axum::Router;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes() -> Router {
    Router::new().nest("/quotes", domain_quotes::handlers::router())
}
