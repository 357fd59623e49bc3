//! Notification test endpoints.
//!
//! Thin forwards to the Mailjet clients so salons can verify their
//! notification setup from the settings page.

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireStaffAuth;
use crate::state::AppState;

/// Build the notifications router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notifications/test-email", post(send_test_email))
        .route("/api/notifications/test-sms", post(send_test_sms))
}

/// Response after sending a test notification.
#[derive(Debug, Serialize)]
pub struct TestNotificationResponse {
    pub success: bool,
}

/// Send a test email to the requesting staff member.
#[instrument(skip(staff, state))]
pub async fn send_test_email(
    RequireStaffAuth(staff): RequireStaffAuth,
    State(state): State<AppState>,
) -> Result<Json<TestNotificationResponse>> {
    state.mailer().send_test_email(&staff.email).await?;
    Ok(Json(TestNotificationResponse { success: true }))
}

/// Request to send a test SMS.
#[derive(Debug, Deserialize)]
pub struct TestSmsRequest {
    /// Destination phone number in E.164 format.
    pub phone: String,
}

/// Send a test SMS to the given number.
#[instrument(skip(state, request))]
pub async fn send_test_sms(
    RequireStaffAuth(_staff): RequireStaffAuth,
    State(state): State<AppState>,
    Json(request): Json<TestSmsRequest>,
) -> Result<Json<TestNotificationResponse>> {
    let phone = request.phone.trim();
    if phone.is_empty() {
        return Err(AppError::BadRequest("phone number is required".to_owned()));
    }

    state.sms().send_test_sms(phone).await?;
    Ok(Json(TestNotificationResponse { success: true }))
}
