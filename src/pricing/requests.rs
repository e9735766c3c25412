//! Request DTOs for pricing API endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::models::PricingOption;

/// Request to resolve an inline pricing option
#[derive(Debug, Deserialize)]
pub struct ResolvePricingRequest {
    #[serde(default)]
    pub option: Option<PricingOption>,
    #[serde(default)]
    pub pax: Value,
    #[serde(default)]
    pub fallback_base_price: Value,
}

/// Request to quote one option of a stored package
#[derive(Debug, Deserialize)]
pub struct QuotePackageRequest {
    #[serde(default)]
    pub option_id: Option<String>,
    #[serde(default)]
    pub pax: Value,
}
