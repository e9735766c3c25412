//! Pricing service functions with store access.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Package;
use crate::AppState;

use super::calculators::resolve_option_pricing;
use super::models::ResolvedPricing;
use super::requests::QuotePackageRequest;

/// Fetch a package, going through the cache first
pub async fn load_package(state: &AppState, package_id: Uuid) -> Result<Arc<Package>> {
    if let Some(cached) = state.cache.packages.get(&package_id).await {
        tracing::debug!("Cache HIT for package: {}", package_id);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for package: {}", package_id);
    let package = state
        .store
        .find_package(package_id)
        .await?
        .ok_or(AppError::NotFound("Package"))?;
    let package = Arc::new(package);
    state.cache.packages.insert(package_id, package.clone()).await;
    Ok(package)
}

/// Price one option of a package for a passenger count.
///
/// A missing or unknown `option_id` prices at the package base price.
pub async fn quote_package(
    state: &AppState,
    package_id: Uuid,
    request: &QuotePackageRequest,
) -> Result<(ResolvedPricing, Option<String>)> {
    let package = load_package(state, package_id).await?;

    let option = request
        .option_id
        .as_deref()
        .and_then(|option_id| package.option(option_id));
    if option.is_none() {
        if let Some(option_id) = &request.option_id {
            tracing::warn!(
                "Package {} has no option '{}', using base price",
                package_id,
                option_id
            );
        }
    }

    let resolved = resolve_option_pricing(option, &request.pax, package.base_price);
    Ok((resolved, option.and_then(|o| o.id.clone())))
}
