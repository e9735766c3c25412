//! Database-facing models

pub mod booking;
pub mod package;

pub use booking::{Booking, BookingRow, NewBooking, PaymentStatus};
pub use package::{Package, PackageRow};
