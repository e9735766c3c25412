//! Pricing engine module.
//!
//! Resolves unit price and total for tour package options, either flat rate
//! or tiered per person, from untrusted pricing configuration.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    normalize_pax, parse_finite_number, resolve_option_pricing, resolve_tier_price, round_money,
    NumericInput,
};
pub use models::{PricingOption, PricingTier, ResolvedPricing};
pub use routes::router;
