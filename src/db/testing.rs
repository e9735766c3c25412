//! Store doubles for tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::bookings::BookingStatus;
use crate::error::Result;
use crate::models::{Booking, NewBooking, Package};

use super::{InMemoryStore, Store};

/// In-memory store whose status writes always lose the compare-and-set, as
/// if another request changed the booking in between.
#[derive(Default)]
pub struct RacingStore {
    pub inner: InMemoryStore,
}

#[async_trait]
impl Store for RacingStore {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>> {
        self.inner.find_package(id).await
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        self.inner.get_booking(id).await
    }

    async fn booking_ref_exists(&self, booking_ref: &str) -> Result<bool> {
        self.inner.booking_ref_exists(booking_ref).await
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking> {
        self.inner.insert_booking(booking).await
    }

    async fn update_booking_status(
        &self,
        _id: Uuid,
        _expected: BookingStatus,
        _next: BookingStatus,
    ) -> Result<Option<Booking>> {
        Ok(None)
    }
}
