//! Booking models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::bookings::BookingStatus;
use crate::error::AppError;

/// Payment state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Partial,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "unpaid" => Some(PaymentStatus::Unpaid),
            "partial" => Some(PaymentStatus::Partial),
            "paid" => Some(PaymentStatus::Paid),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

/// Booking row as stored in the database
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub booking_ref: String,
    pub customer_id: Uuid,
    pub trip_id: Uuid,
    pub pax: i32,
    pub total_amount: Decimal,
    pub status: String,
    pub payment_status: String,
    pub booking_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking with typed statuses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub booking_ref: String,
    pub customer_id: Uuid,
    pub trip_id: Uuid,
    pub pax: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub booking_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<BookingStatus>().map_err(|_| {
            AppError::Internal(format!("booking {} has unknown status '{}'", row.id, row.status))
        })?;
        let payment_status = PaymentStatus::parse(&row.payment_status).ok_or_else(|| {
            AppError::Internal(format!(
                "booking {} has unknown payment status '{}'",
                row.id, row.payment_status
            ))
        })?;

        Ok(Booking {
            id: row.id,
            booking_ref: row.booking_ref,
            customer_id: row.customer_id,
            trip_id: row.trip_id,
            pax: row.pax,
            total_amount: row.total_amount,
            status,
            payment_status,
            booking_date: row.booking_date,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Fields for inserting a booking; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub booking_ref: String,
    pub customer_id: Uuid,
    pub trip_id: Uuid,
    pub pax: i32,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub booking_date: DateTime<Utc>,
    pub notes: Option<String>,
}
