//! Route definitions
//!
//! Reservation routes are mounted under /api/v1; health probes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, reservations};
use crate::state::AppState;

/// Create the API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(reservation_routes())
}

/// Reservation routes
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", post(reservations::create_reservation))
        .route("/reservations/@me", get(reservations::get_my_reservations))
        .route(
            "/reservations/:reservation_id",
            get(reservations::get_reservation)
                .patch(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
}
