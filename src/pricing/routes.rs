//! Pricing API routes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::response::api_success;
use crate::AppState;

use super::calculators::resolve_option_pricing;
use super::requests::{QuotePackageRequest, ResolvePricingRequest};
use super::responses::PricingQuoteResponse;
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/pricing/resolve", post(resolve))
        .route("/api/v1/packages/:id/quote", post(quote_package))
        .route("/api/v1/packages/:id/cache/invalidate", post(invalidate_package))
}

/// Resolve an inline pricing option
async fn resolve(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ResolvePricingRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let resolved = resolve_option_pricing(
        request.option.as_ref(),
        &request.pax,
        &request.fallback_base_price,
    );
    let mut response = PricingQuoteResponse::from_resolved(resolved, &state.currency);
    response.option_id = request.option.and_then(|o| o.id);
    Ok(api_success(response, StatusCode::OK))
}

/// Quote an option of a stored package
async fn quote_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
    payload: std::result::Result<Json<QuotePackageRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let (resolved, option_id) = services::quote_package(&state, package_id, &request).await?;

    let mut response = PricingQuoteResponse::from_resolved(resolved, &state.currency);
    response.package_id = Some(package_id);
    response.option_id = option_id;
    Ok(api_success(response, StatusCode::OK))
}

/// Drop a package from the cache after its pricing was edited
async fn invalidate_package(
    State(state): State<AppState>,
    Path(package_id): Path<Uuid>,
) -> Response {
    state.cache.invalidate_package(package_id).await;
    api_success(serde_json::json!({ "package_id": package_id }), StatusCode::OK)
}
