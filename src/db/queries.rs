//! Postgres queries for packages and bookings

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::bookings::BookingStatus;
use crate::error::Result;
use crate::models::{Booking, BookingRow, NewBooking, Package, PackageRow};

use super::Store;

const BOOKING_COLUMNS: &str = r#"
    id, booking_ref, customer_id, trip_id, pax, total_amount,
    status, payment_status, booking_date, notes, created_at, updated_at
"#;

/// Store backed by a Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>> {
        let row = sqlx::query_as::<_, PackageRow>(
            r#"
            SELECT id, name, base_price, options
            FROM packages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Package::from))
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Booking::try_from).transpose()
    }

    async fn booking_ref_exists(&self, booking_ref: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookings WHERE booking_ref = $1)",
        )
        .bind(booking_ref)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking> {
        let sql = format!(
            r#"
            INSERT INTO bookings (
                booking_ref, customer_id, trip_id, pax, total_amount,
                status, payment_status, booking_date, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {BOOKING_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(&booking.booking_ref)
            .bind(booking.customer_id)
            .bind(booking.trip_id)
            .bind(booking.pax)
            .bind(booking.total_amount)
            .bind(booking.status.as_str())
            .bind(booking.payment_status.as_str())
            .bind(booking.booking_date)
            .bind(&booking.notes)
            .fetch_one(&self.pool)
            .await?;

        Booking::try_from(row)
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<Option<Booking>> {
        // Guarding on the old status turns a stale read into zero rows
        // instead of a silent overwrite.
        let sql = format!(
            r#"
            UPDATE bookings
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING {BOOKING_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, BookingRow>(&sql)
            .bind(id)
            .bind(expected.as_str())
            .bind(next.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Booking::try_from).transpose()
    }
}
