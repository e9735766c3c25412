//! Pricing configuration models.
//!
//! Options and tiers are stored as JSON on the package row and edited by hand
//! in the back office, so every numeric field is kept as a raw JSON value and
//! coerced by the calculators instead of being rejected at deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A per-person price bracket, inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub min_pax: Value,
    /// `null` means no upper bound
    #[serde(default)]
    pub max_pax: Value,
    #[serde(default)]
    pub price_per_person: Value,
}

impl PricingTier {
    pub fn new(min_pax: u32, max_pax: Option<u32>, price_per_person: Decimal) -> Self {
        Self {
            id: None,
            min_pax: Value::from(min_pax),
            max_pax: max_pax.map(Value::from).unwrap_or(Value::Null),
            price_per_person: Value::String(price_per_person.to_string()),
        }
    }
}

/// Pricing configuration of a single package option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Only a JSON `true` selects flat-rate pricing.
    #[serde(default)]
    pub is_flat_rate: Value,
    #[serde(default)]
    pub flat_rate_price: Value,
    #[serde(default)]
    pub pricing_tiers: Option<Vec<PricingTier>>,
}

impl PricingOption {
    pub fn flat_rate(price: Decimal) -> Self {
        Self {
            is_flat_rate: Value::Bool(true),
            flat_rate_price: Value::String(price.to_string()),
            ..Self::default()
        }
    }

    pub fn tiered(tiers: Vec<PricingTier>) -> Self {
        Self {
            is_flat_rate: Value::Bool(false),
            pricing_tiers: Some(tiers),
            ..Self::default()
        }
    }

    pub fn is_flat_rate(&self) -> bool {
        matches!(self.is_flat_rate, Value::Bool(true))
    }

    pub fn tiers(&self) -> &[PricingTier] {
        self.pricing_tiers.as_deref().unwrap_or(&[])
    }
}

/// Resolved unit price and total for a passenger count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPricing {
    pub unit_price: Decimal,
    pub total: Decimal,
    pub is_flat_rate: bool,
    /// Passenger count after normalization
    pub pax: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_deserializes_camel_case_json() {
        let option: PricingOption = serde_json::from_value(json!({
            "id": "opt-1",
            "name": "Speedboat",
            "isFlatRate": false,
            "pricingTiers": [
                { "id": "t1", "minPax": 1, "maxPax": 4, "pricePerPerson": 1000 },
                { "id": "t2", "minPax": 5, "maxPax": null, "pricePerPerson": 800 }
            ]
        }))
        .unwrap();

        assert_eq!(option.id.as_deref(), Some("opt-1"));
        assert!(!option.is_flat_rate());
        assert_eq!(option.tiers().len(), 2);
        assert_eq!(option.tiers()[1].max_pax, Value::Null);
    }

    #[test]
    fn test_missing_fields_default_to_null() {
        let option: PricingOption = serde_json::from_value(json!({})).unwrap();
        assert!(!option.is_flat_rate());
        assert!(option.tiers().is_empty());
        assert_eq!(option.flat_rate_price, Value::Null);
    }

    #[test]
    fn test_flat_rate_requires_boolean_true() {
        for raw in [json!("true"), json!(1), json!(null)] {
            let option = PricingOption {
                is_flat_rate: raw,
                ..PricingOption::default()
            };
            assert!(!option.is_flat_rate());
        }
        let option: PricingOption = serde_json::from_value(json!({ "isFlatRate": true })).unwrap();
        assert!(option.is_flat_rate());
    }
}
