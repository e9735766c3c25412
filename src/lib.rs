//! Tour booking back-office API.
//!
//! Package option pricing (flat rate or tiered per person) and the booking
//! status lifecycle, served over Axum on top of a Postgres or in-memory store.

pub mod bookings;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod response;
pub mod routes;

use std::sync::Arc;

use cache::AppCache;
use db::Store;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cache: AppCache,
    /// Currency code attached to price quotes
    pub currency: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, cache: AppCache, currency: &str) -> Self {
        Self {
            store,
            cache,
            currency: Arc::from(currency),
        }
    }
}
