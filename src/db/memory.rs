//! In-memory store for development and testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::bookings::BookingStatus;
use crate::error::Result;
use crate::models::{Booking, NewBooking, Package};

use super::Store;

/// In-memory store for development and testing
#[derive(Default)]
pub struct InMemoryStore {
    packages: DashMap<Uuid, Package>,
    bookings: DashMap<Uuid, Booking>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&self, package: Package) {
        self.packages.insert(package.id, package);
    }

    /// Insert a booking as-is, bypassing creation rules
    pub fn put_booking(&self, booking: Booking) {
        self.bookings.insert(booking.id, booking);
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>> {
        Ok(self.packages.get(&id).map(|entry| entry.value().clone()))
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn booking_ref_exists(&self, booking_ref: &str) -> Result<bool> {
        Ok(self
            .bookings
            .iter()
            .any(|entry| entry.value().booking_ref == booking_ref))
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking> {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            booking_ref: booking.booking_ref,
            customer_id: booking.customer_id,
            trip_id: booking.trip_id,
            pax: booking.pax,
            total_amount: booking.total_amount,
            status: booking.status,
            payment_status: booking.payment_status,
            booking_date: booking.booking_date,
            notes: booking.notes,
            created_at: now,
            updated_at: now,
        };
        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn update_booking_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<Option<Booking>> {
        let Some(mut entry) = self.bookings.get_mut(&id) else {
            return Ok(None);
        };
        if entry.status != expected {
            return Ok(None);
        }
        entry.status = next;
        entry.updated_at = Utc::now();
        Ok(Some(entry.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;
    use rust_decimal_macros::dec;

    fn new_booking(booking_ref: &str) -> NewBooking {
        NewBooking {
            booking_ref: booking_ref.to_string(),
            customer_id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            pax: 2,
            total_amount: dec!(3000),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            booking_date: Utc::now(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let store = InMemoryStore::new();
        let booking = store.insert_booking(new_booking("BK-2026-AAAAAA")).await.unwrap();

        let fetched = store.get_booking(booking.id).await.unwrap().unwrap();
        assert_eq!(fetched, booking);
        assert!(store.booking_ref_exists("BK-2026-AAAAAA").await.unwrap());
        assert!(!store.booking_ref_exists("BK-2026-BBBBBB").await.unwrap());
    }

    #[tokio::test]
    async fn test_status_update_is_compare_and_set() {
        let store = InMemoryStore::new();
        let booking = store.insert_booking(new_booking("BK-2026-CCCCCC")).await.unwrap();

        let updated = store
            .update_booking_status(booking.id, BookingStatus::Pending, BookingStatus::Confirmed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);

        // A second writer that read "pending" loses
        let stale = store
            .update_booking_status(booking.id, BookingStatus::Pending, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert!(stale.is_none());

        let missing = store
            .update_booking_status(Uuid::new_v4(), BookingStatus::Pending, BookingStatus::Confirmed)
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
