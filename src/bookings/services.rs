//! Booking service functions with store access.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::{Booking, NewBooking, PaymentStatus};

use super::requests::CreateBookingRequest;
use super::status::{parse_and_validate, BookingStatus};

const BOOKING_REF_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const BOOKING_REF_ATTEMPTS: usize = 10;

/// Random `BK-<year>-XXXXXX` reference
pub fn generate_booking_ref(year: i32) -> String {
    let random = Uuid::new_v4();
    let suffix: String = random.as_bytes()[..6]
        .iter()
        .map(|b| BOOKING_REF_CHARS[*b as usize % BOOKING_REF_CHARS.len()] as char)
        .collect();
    format!("BK-{}-{}", year, suffix)
}

async fn unique_booking_ref(store: &dyn Store) -> Result<String> {
    let year = Utc::now().year();
    for _ in 0..BOOKING_REF_ATTEMPTS {
        let candidate = generate_booking_ref(year);
        if !store.booking_ref_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::Internal(format!(
        "no free booking reference after {} attempts",
        BOOKING_REF_ATTEMPTS
    )))
}

/// Create a booking in `pending` / `unpaid` state
pub async fn create_booking(store: &dyn Store, request: CreateBookingRequest) -> Result<Booking> {
    if request.pax < 1 {
        return Err(AppError::invalid_field("pax", "pax must be at least 1", "MIN_VALUE"));
    }
    if request.total_amount < Decimal::ZERO {
        return Err(AppError::invalid_field(
            "total_amount",
            "total_amount must not be negative",
            "MIN_VALUE",
        ));
    }

    let booking_ref = unique_booking_ref(store).await?;
    let booking = store
        .insert_booking(NewBooking {
            booking_ref,
            customer_id: request.customer_id,
            trip_id: request.trip_id,
            pax: request.pax,
            total_amount: request.total_amount,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            booking_date: Utc::now(),
            notes: request.notes,
        })
        .await?;

    tracing::info!("Created booking {} ({})", booking.booking_ref, booking.id);
    Ok(booking)
}

pub async fn get_booking(store: &dyn Store, id: Uuid) -> Result<Booking> {
    store.get_booking(id).await?.ok_or(AppError::NotFound("Booking"))
}

/// Move a booking to `requested`, if the lifecycle allows it.
///
/// The requested value is checked before the booking is loaded, so an
/// unknown status is a 400 even for a missing booking.
pub async fn update_status(
    store: &dyn Store,
    id: Uuid,
    requested: &serde_json::Value,
) -> Result<Booking> {
    let raw = requested.as_str().unwrap_or_default();
    raw.parse::<BookingStatus>()?;

    let current = get_booking(store, id).await?;
    let requested_status = parse_and_validate(current.status, raw).map_err(|err| {
        tracing::debug!(
            terminal = current.status.is_terminal(),
            "Rejected status change for booking {}: {}",
            id,
            err
        );
        AppError::from(err)
    })?;

    let updated = store
        .update_booking_status(id, current.status, requested_status)
        .await?
        .ok_or_else(|| {
            tracing::warn!(
                "Booking {} changed while moving {} -> {}",
                id,
                current.status,
                requested_status
            );
            AppError::Conflict(format!(
                "Booking status is no longer '{}'; reload and retry",
                current.status
            ))
        })?;

    tracing::info!(
        "Booking {} status {} -> {}",
        updated.booking_ref,
        current.status,
        updated.status
    );
    Ok(updated)
}
