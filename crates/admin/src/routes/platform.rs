//! Platform operator routes.
//!
//! Allow-listed operators can temporarily act as a specific salon
//! ("impersonation"). The selection is just a session value; the effective
//! context it produces is derived per request by the salon-context
//! resolver, so clearing the session immediately ends the impersonation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{RequirePlatformAdmin, SalonScope};
use crate::models::session_keys;
use crate::state::AppState;

use super::dashboard::{SalonView, StaffView};

/// Build the platform router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/platform", get(platform_page))
        .route("/platform/impersonate", post(impersonate))
        .route("/platform/stop", post(stop_impersonating))
}

/// Platform admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "platform/index.html")]
pub struct PlatformTemplate {
    pub staff: StaffView,
    pub salon: SalonView,
}

/// Platform admin page with the impersonation controls.
#[instrument(skip(staff, salon))]
pub async fn platform_page(
    RequirePlatformAdmin(staff): RequirePlatformAdmin,
    SalonScope(salon): SalonScope,
) -> Result<PlatformTemplate> {
    Ok(PlatformTemplate {
        staff: StaffView::from(&staff),
        salon: SalonView::from(&salon),
    })
}

/// Form selecting a salon to act as.
#[derive(Debug, Deserialize)]
pub struct ImpersonateForm {
    pub salon_id: String,
}

/// Select a salon to act as.
#[instrument(skip(session, form))]
pub async fn impersonate(
    RequirePlatformAdmin(_staff): RequirePlatformAdmin,
    session: Session,
    Form(form): Form<ImpersonateForm>,
) -> Result<Redirect> {
    let salon_id = form.salon_id.trim();
    if salon_id.is_empty() {
        return Err(AppError::BadRequest("salon id is required".to_owned()));
    }

    session
        .insert(session_keys::SELECTED_SALON, salon_id.to_owned())
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!(salon_id = %salon_id, "Impersonation started");
    Ok(Redirect::to("/platform"))
}

/// Clear the impersonation selection.
#[instrument(skip(session))]
pub async fn stop_impersonating(
    RequirePlatformAdmin(_staff): RequirePlatformAdmin,
    session: Session,
) -> Result<Redirect> {
    session
        .remove::<String>(session_keys::SELECTED_SALON)
        .await
        .map_err(|e| AppError::Internal(format!("session write failed: {e}")))?;

    tracing::info!("Impersonation stopped");
    Ok(Redirect::to("/platform"))
}
