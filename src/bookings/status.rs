//! Booking lifecycle state machine.
//!
//! ```text
//! pending ──> confirmed ──> completed
//!    │            │
//!    └────────────┴──> cancelled
//! ```
//!
//! `completed` and `cancelled` are terminal. Self-transitions are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

use BookingStatus::{Cancelled, Completed, Confirmed, Pending};

/// Allowed next states, indexed by the current state's discriminant.
static TRANSITIONS: [&[BookingStatus]; 4] = [
    &[Confirmed, Cancelled], // pending
    &[Completed, Cancelled], // confirmed
    &[],                     // completed
    &[],                     // cancelled
];

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [Pending, Confirmed, Completed, Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Pending => "pending",
            Confirmed => "confirmed",
            Completed => "completed",
            Cancelled => "cancelled",
        }
    }

    pub fn allowed_transitions(self) -> &'static [BookingStatus] {
        TRANSITIONS[self as usize]
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| StatusError::UnknownStatusValue(s.to_string()))
    }
}

/// Comma-separated list of statuses, or `none`
pub fn format_statuses(statuses: &[BookingStatus]) -> String {
    if statuses.is_empty() {
        return "none".to_string();
    }
    statuses
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a requested status change was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("Invalid status '{0}'. Must be one of: pending, confirmed, completed, cancelled")]
    UnknownStatusValue(String),

    #[error("Cannot transition from '{from}' to '{to}'. Allowed: {}", format_statuses(.allowed))]
    IllegalTransition {
        from: BookingStatus,
        to: BookingStatus,
        allowed: &'static [BookingStatus],
    },
}

/// Check a transition against the lifecycle table.
pub fn validate_transition(current: BookingStatus, requested: BookingStatus) -> Result<(), StatusError> {
    if current.can_transition_to(requested) {
        Ok(())
    } else {
        Err(StatusError::IllegalTransition {
            from: current,
            to: requested,
            allowed: current.allowed_transitions(),
        })
    }
}

/// Parse a raw requested status and check it against `current`.
///
/// An unrecognised value is reported as [`StatusError::UnknownStatusValue`]
/// even when `current` is terminal.
pub fn parse_and_validate(current: BookingStatus, requested: &str) -> Result<BookingStatus, StatusError> {
    let requested = requested.parse::<BookingStatus>()?;
    validate_transition(current, requested)?;
    Ok(requested)
}
