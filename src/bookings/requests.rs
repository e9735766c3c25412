//! Request DTOs for booking API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

/// Request to create a booking
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub trip_id: Uuid,
    pub pax: i32,
    pub total_amount: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to change a booking's status.
///
/// `status` stays raw so a missing or non-string value is reported as an
/// invalid status rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Value,
}
