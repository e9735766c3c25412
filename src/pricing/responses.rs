//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::round_money;
use super::models::ResolvedPricing;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Rounded to two places for display
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount: round_money(amount, 2),
            currency: currency.to_string(),
        }
    }
}

/// Response for option pricing resolution
#[derive(Debug, Serialize)]
pub struct PricingQuoteResponse {
    pub unit_price: MoneyResponse,
    pub total: MoneyResponse,
    pub is_flat_rate: bool,
    pub pax: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
}

impl PricingQuoteResponse {
    pub fn from_resolved(resolved: ResolvedPricing, currency: &str) -> Self {
        Self {
            unit_price: MoneyResponse::new(resolved.unit_price, currency),
            total: MoneyResponse::new(resolved.total, currency),
            is_flat_rate: resolved.is_flat_rate,
            pax: resolved.pax,
            package_id: None,
            option_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_serializes_amounts_as_strings() {
        let resolved = ResolvedPricing {
            unit_price: dec!(333.335),
            total: dec!(1000.005),
            is_flat_rate: false,
            pax: 3,
        };
        let json = serde_json::to_value(PricingQuoteResponse::from_resolved(resolved, "THB")).unwrap();

        assert_eq!(json["unit_price"]["amount"], "333.34");
        assert_eq!(json["total"]["amount"], "1000.00");
        assert_eq!(json["total"]["currency"], "THB");
        assert_eq!(json["pax"], 3);
        assert!(json.get("package_id").is_none());
    }
}
