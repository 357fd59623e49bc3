//! HTTP route handlers for the staff dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Health check
//!
//! # Dashboard (salon admins)
//! GET  /                             - Dashboard overview
//! GET  /dashboard                    - Dashboard overview
//!
//! # Settings
//! GET  /settings                     - Settings overview with menu
//! GET  /settings/{section}           - Settings section page
//! POST /api/team/invite              - Send a staff invitation email
//! POST /api/notifications/test-email - Send a test notification email
//! POST /api/notifications/test-sms   - Send a test notification SMS
//!
//! # Billing (thin forwards to Stripe)
//! POST /api/billing/checkout         - Start a subscription checkout
//! POST /api/billing/portal           - Open the customer billing portal
//! POST /api/billing/usage            - Record SMS usage on the meter
//!
//! # Platform (allow-listed operators only)
//! GET  /platform                     - Impersonation controls
//! POST /platform/impersonate         - Select a salon to act as
//! POST /platform/stop                - Clear the selection
//! ```

use axum::{Router, routing::get};

use crate::state::AppState;

pub mod billing;
pub mod dashboard;
pub mod notifications;
pub mod platform;
pub mod settings;

/// Build the admin router. The session layer is applied by the binary.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(dashboard::dashboard))
        .route("/dashboard", get(dashboard::dashboard))
        .merge(settings::router())
        .merge(notifications::router())
        .merge(billing::router())
        .merge(platform::router())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
