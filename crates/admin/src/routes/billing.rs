//! Billing API routes.
//!
//! Thin forwards to Stripe: the dashboard never holds payment state, it
//! just hands the browser a hosted Stripe page (checkout or portal) and
//! records SMS usage against the salon's billing meter.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireStaffAuth;
use crate::state::AppState;

/// Build the billing router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/billing/checkout", post(create_checkout))
        .route("/api/billing/portal", post(create_portal))
        .route("/api/billing/usage", post(record_usage))
}

/// Response carrying a hosted Stripe page URL.
#[derive(Debug, Serialize)]
pub struct HostedPageResponse {
    pub url: String,
}

/// Start a subscription checkout for the requesting staff member's salon.
#[instrument(skip(staff, state))]
pub async fn create_checkout(
    RequireStaffAuth(staff): RequireStaffAuth,
    State(state): State<AppState>,
) -> Result<Json<HostedPageResponse>> {
    let base = &state.config().base_url;
    let session = state
        .billing()
        .create_checkout_session(
            &staff.email,
            &format!("{base}/settings/billing?checkout=success"),
            &format!("{base}/settings/billing?checkout=cancelled"),
        )
        .await?;

    Ok(Json(HostedPageResponse { url: session.url }))
}

/// Request to open the billing portal.
#[derive(Debug, Deserialize)]
pub struct PortalRequest {
    /// The salon's Stripe customer ID.
    pub customer_id: String,
}

/// Open the Stripe customer portal for a salon.
#[instrument(skip(state, request))]
pub async fn create_portal(
    RequireStaffAuth(_staff): RequireStaffAuth,
    State(state): State<AppState>,
    Json(request): Json<PortalRequest>,
) -> Result<Json<HostedPageResponse>> {
    let base = &state.config().base_url;
    let session = state
        .billing()
        .create_portal_session(&request.customer_id, &format!("{base}/settings/billing"))
        .await?;

    Ok(Json(HostedPageResponse { url: session.url }))
}

/// Request to record SMS usage.
#[derive(Debug, Deserialize)]
pub struct RecordUsageRequest {
    /// The salon's Stripe customer ID.
    pub customer_id: String,
    /// Number of SMS segments sent.
    pub quantity: u32,
}

/// Response after recording usage.
#[derive(Debug, Serialize)]
pub struct RecordUsageResponse {
    pub success: bool,
    pub identifier: String,
}

/// Record SMS usage against the salon's billing meter.
#[instrument(skip(state, request))]
pub async fn record_usage(
    RequireStaffAuth(_staff): RequireStaffAuth,
    State(state): State<AppState>,
    Json(request): Json<RecordUsageRequest>,
) -> Result<Json<RecordUsageResponse>> {
    if request.quantity == 0 {
        return Err(AppError::BadRequest("quantity must be positive".to_owned()));
    }

    let event = state
        .billing()
        .record_sms_usage(&request.customer_id, request.quantity)
        .await?;

    Ok(Json(RecordUsageResponse {
        success: true,
        identifier: event.identifier,
    }))
}
