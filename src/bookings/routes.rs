//! Booking API routes

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::response::api_success;
use crate::AppState;

use super::requests::{CreateBookingRequest, UpdateStatusRequest};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/:id", get(get_booking))
        .route("/api/bookings/:id/status", patch(update_status))
}

async fn create_booking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let booking = services::create_booking(state.store.as_ref(), request).await?;
    Ok(api_success(booking, StatusCode::CREATED))
}

async fn get_booking(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Response> {
    let booking = services::get_booking(state.store.as_ref(), id).await?;
    Ok(api_success(booking, StatusCode::OK))
}

/// PATCH /api/bookings/:id/status - change status, enforcing the lifecycle
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    let booking = services::update_status(state.store.as_ref(), id, &request.status).await?;
    Ok(api_success(booking, StatusCode::OK))
}
