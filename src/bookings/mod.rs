//! Booking creation and lifecycle management.

pub mod requests;
pub mod routes;
pub mod services;
pub mod status;

pub use routes::router;
pub use status::{
    format_statuses, parse_and_validate, validate_transition, BookingStatus, StatusError,
};
