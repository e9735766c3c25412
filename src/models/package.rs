//! Tour package models

use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::pricing::PricingOption;

/// Package row from database
#[derive(Debug, Clone, FromRow)]
pub struct PackageRow {
    pub id: Uuid,
    pub name: String,
    pub base_price: Decimal,
    pub options: Option<serde_json::Value>,
}

/// Package with its pricing options parsed
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub base_price: Decimal,
    pub options: Vec<PricingOption>,
}

impl Package {
    /// Look up an option by id
    pub fn option(&self, option_id: &str) -> Option<&PricingOption> {
        self.options
            .iter()
            .find(|option| option.id.as_deref() == Some(option_id))
    }
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        let options = match row.options {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(raw) => serde_json::from_value(raw).unwrap_or_else(|e| {
                tracing::warn!("Package {} has malformed options, ignoring them: {}", row.id, e);
                Vec::new()
            }),
        };

        Package {
            id: row.id,
            name: row.name,
            base_price: row.base_price,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn row(options: Option<serde_json::Value>) -> PackageRow {
        PackageRow {
            id: Uuid::new_v4(),
            name: "Phi Phi Island Day Trip".to_string(),
            base_price: dec!(1500),
            options,
        }
    }

    #[test]
    fn test_options_parsed_from_json() {
        let package = Package::from(row(Some(json!([
            { "id": "joined", "isFlatRate": false, "pricingTiers": [] },
            { "id": "private", "isFlatRate": true, "flatRatePrice": 12000 }
        ]))));

        assert_eq!(package.options.len(), 2);
        assert!(package.option("private").unwrap().is_flat_rate());
        assert!(package.option("missing").is_none());
    }

    #[test]
    fn test_malformed_options_become_empty() {
        let package = Package::from(row(Some(json!({ "not": "a list" }))));
        assert!(package.options.is_empty());

        let package = Package::from(row(None));
        assert!(package.options.is_empty());
    }
}
