//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access. Every numeric value
//! read from a pricing configuration or request goes through
//! [`parse_finite_number`], so a malformed option always resolves to a
//! defined price instead of an error.

use std::str::FromStr;

use rust_decimal::prelude::*;
use serde_json::Value;

use super::models::{PricingOption, PricingTier, ResolvedPricing};

/// A value that may or may not hold a usable finite number.
pub trait NumericInput {
    /// The finite decimal value, or `None` when the input is not a number.
    fn to_finite_decimal(&self) -> Option<Decimal>;
}

impl NumericInput for Decimal {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl NumericInput for f64 {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        // Finite values beyond the decimal range clamp to its bounds.
        Decimal::from_f64(*self).or(Some(if self.abs() < 1.0 {
            Decimal::ZERO
        } else if self.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }))
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn to_finite_decimal(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i32, i64, u32, u64);

impl NumericInput for str {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok()?.to_finite_decimal())
    }
}

impl NumericInput for String {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        self.as_str().to_finite_decimal()
    }
}

impl NumericInput for Value {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Decimal::from(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Decimal::from(u))
                } else {
                    n.as_f64().and_then(|f| f.to_finite_decimal())
                }
            }
            Value::String(s) => s.to_finite_decimal(),
            _ => None,
        }
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        self.as_ref().and_then(NumericInput::to_finite_decimal)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_finite_decimal(&self) -> Option<Decimal> {
        (**self).to_finite_decimal()
    }
}

/// Read a number from untrusted input, using `fallback` when it is missing,
/// malformed or non-finite. Finite values past `Decimal::MAX` saturate.
pub fn parse_finite_number(value: impl NumericInput, fallback: Decimal) -> Decimal {
    value.to_finite_decimal().unwrap_or(fallback)
}

/// Normalize a raw passenger count: non-numeric becomes 1, fractions are
/// floored and anything below 1 is raised to 1.
pub fn normalize_pax(pax: impl NumericInput) -> u32 {
    let floored = parse_finite_number(pax, Decimal::ONE).floor();
    if floored < Decimal::ONE {
        return 1;
    }
    floored.to_u32().unwrap_or(u32::MAX)
}

fn tier_contains(tier: &PricingTier, pax: Decimal) -> bool {
    let min = parse_finite_number(&tier.min_pax, Decimal::ZERO);
    // null or unparsable upper bound means the tier is open-ended
    let max = tier.max_pax.to_finite_decimal();
    pax >= min && max.map_or(true, |max| pax <= max)
}

/// Find the first tier, in the given order, whose range contains `pax`.
///
/// Overlapping or gapped tiers are not rejected; order decides.
pub fn resolve_tier_price(tiers: &[PricingTier], pax: impl NumericInput) -> Option<&PricingTier> {
    let pax = Decimal::from(normalize_pax(pax));
    tiers.iter().find(|tier| tier_contains(tier, pax))
}

fn per_person_total(unit_price: Decimal, pax: u32) -> Decimal {
    unit_price
        .checked_mul(Decimal::from(pax))
        .unwrap_or(if unit_price.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Resolve unit price and total for a package option.
///
/// Resolution order:
/// 1. No option: the fallback base price per person.
/// 2. Flat rate: `flatRatePrice` once for the whole booking.
/// 3. Tiered: the first matching tier's `pricePerPerson` per person.
/// 4. No matching tier: the fallback base price per person.
///
/// Unparsable prices fall back to `fallback_base_price`, which itself
/// defaults to zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tourbooking_web::pricing::resolve_option_pricing;
///
/// let pricing = resolve_option_pricing(None, 4, dec!(250));
/// assert_eq!(pricing.unit_price, dec!(250));
/// assert_eq!(pricing.total, dec!(1000));
/// assert!(!pricing.is_flat_rate);
/// ```
pub fn resolve_option_pricing(
    option: Option<&PricingOption>,
    pax: impl NumericInput,
    fallback_base_price: impl NumericInput,
) -> ResolvedPricing {
    let pax = normalize_pax(pax);
    let fallback = parse_finite_number(fallback_base_price, Decimal::ZERO);

    let per_person = |unit_price: Decimal| ResolvedPricing {
        unit_price,
        total: per_person_total(unit_price, pax),
        is_flat_rate: false,
        pax,
    };

    let Some(option) = option else {
        return per_person(fallback);
    };

    if option.is_flat_rate() {
        let flat_rate_price = parse_finite_number(&option.flat_rate_price, fallback);
        return ResolvedPricing {
            unit_price: flat_rate_price,
            total: flat_rate_price,
            is_flat_rate: true,
            pax,
        };
    }

    match resolve_tier_price(option.tiers(), pax) {
        Some(tier) => per_person(parse_finite_number(&tier.price_per_person, fallback)),
        None => per_person(fallback),
    }
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tourbooking_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}
