use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Quote API",
        version = "0.1.0",
        description = "Instant price and delivery estimates for website projects"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/quotes", api = domain_quotes::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
