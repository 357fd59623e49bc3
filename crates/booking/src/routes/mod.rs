//! HTTP route handlers for the public booking site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//! GET  /                          - Salon index
//! GET  /booking/{slug}            - Salon booking page
//! POST /booking/{slug}            - Submit a booking request
//! GET  /booking/{slug}/confirmed  - Confirmation page
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod booking;
pub mod home;

/// Build the booking site router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home::home))
        .route(
            "/booking/{slug}",
            get(booking::booking_page).post(booking::submit_booking),
        )
        .route("/booking/{slug}/confirmed", get(booking::confirmed_page))
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
