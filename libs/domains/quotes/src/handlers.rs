//! HTTP handlers for the quotes domain

use axum::{
    Json, Router,
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use utoipa::OpenApi;

use crate::calculator::compute_quote;
use crate::catalog::{
    DesignComplexityOption, FeatureOption, PageRules, QuoteOptions, TimelineOption,
    WebsiteTypeOption,
};
use crate::error::QuoteResult;
use crate::models::{
    ContactDetails, DesignComplexity, Feature, Features, ProjectRequirements, QuoteBreakdown,
    QuoteRequest, QuoteResponse, QuoteSummary, Timeline, WebsiteType,
};

pub const TAG: &str = "quotes";

/// OpenAPI documentation for the Quotes API
#[derive(OpenApi)]
#[openapi(
    paths(calculate_quote, get_options),
    components(
        schemas(
            QuoteRequest,
            QuoteResponse,
            QuoteBreakdown,
            QuoteSummary,
            ContactDetails,
            ProjectRequirements,
            Features,
            Feature,
            WebsiteType,
            DesignComplexity,
            Timeline,
            QuoteOptions,
            WebsiteTypeOption,
            DesignComplexityOption,
            TimelineOption,
            FeatureOption,
            PageRules,
        ),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Website project quote calculator")
    )
)]
pub struct ApiDoc;

/// Create the quotes router
///
/// Handlers are stateless; every request is priced independently and nothing
/// is stored.
pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(calculate_quote))
        .route("/options", get(get_options))
}

/// Calculate a quote for a project
#[utoipa::path(
    post,
    path = "/calculate",
    tag = TAG,
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Calculated quote", body = QuoteResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, description = "Body is not a valid quote request"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn calculate_quote(
    ValidatedJson(request): ValidatedJson<QuoteRequest>,
) -> QuoteResult<Json<QuoteResponse>> {
    let requirements = request.requirements()?;
    let quote = compute_quote(&requirements);

    tracing::info!(
        website_type = %requirements.website_type,
        design_complexity = %requirements.design_complexity,
        page_count = requirements.page_count.get(),
        timeline = %requirements.timeline,
        total_price = quote.total_price,
        weeks = quote.estimated_time_in_weeks,
        "Quote calculated"
    );

    let summary = QuoteSummary::new(&requirements, request.contact());

    Ok(Json(QuoteResponse { quote, summary }))
}

/// List the options available on the quote form
#[utoipa::path(
    get,
    path = "/options",
    tag = TAG,
    responses(
        (status = 200, description = "Quote form options and rates", body = QuoteOptions)
    )
)]
async fn get_options() -> Json<QuoteOptions> {
    Json(QuoteOptions::current())
}
