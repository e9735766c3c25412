//! Persistence for packages and bookings.
//!
//! Handlers only see the [`Store`] trait. [`PgStore`] talks to Postgres;
//! [`InMemoryStore`] backs tests and local runs without a database.

pub mod memory;
pub mod queries;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;
use uuid::Uuid;

use crate::bookings::BookingStatus;
use crate::error::Result;
use crate::models::{Booking, NewBooking, Package};

pub use memory::InMemoryStore;
pub use queries::PgStore;

/// Storage operations needed by the API
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_package(&self, id: Uuid) -> Result<Option<Package>>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;

    async fn booking_ref_exists(&self, booking_ref: &str) -> Result<bool>;

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking>;

    /// Compare-and-set the status. Returns `None` when the booking does not
    /// exist or its status is no longer `expected`.
    async fn update_booking_status(
        &self,
        id: Uuid,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<Option<Booking>>;
}
