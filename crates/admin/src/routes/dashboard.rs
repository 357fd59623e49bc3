//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::context::SalonContext;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{RequireStaffAuth, SalonScope};
use crate::models::CurrentStaff;
use crate::navigation::{NavItem, settings_navigation};
use crate::state::AppState;

/// Staff member view for templates.
#[derive(Debug, Clone)]
pub struct StaffView {
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&CurrentStaff> for StaffView {
    fn from(staff: &CurrentStaff) -> Self {
        Self {
            name: staff.name.clone(),
            email: staff.email.to_string(),
            is_admin: staff.role.is_admin(),
        }
    }
}

/// Effective salon view for templates.
#[derive(Debug, Clone)]
pub struct SalonView {
    pub name: String,
    pub id: String,
    pub is_platform_admin: bool,
    pub is_impersonating: bool,
    pub selected_salon_id: String,
}

impl From<&SalonContext> for SalonView {
    fn from(ctx: &SalonContext) -> Self {
        Self {
            name: ctx
                .salon_name
                .clone()
                .unwrap_or_else(|| "Your salon".to_owned()),
            id: ctx
                .salon_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            is_platform_admin: ctx.is_platform_admin,
            is_impersonating: ctx.is_impersonating,
            selected_salon_id: ctx
                .selected_salon_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub staff: StaffView,
    pub salon: SalonView,
    pub nav: Vec<NavItem>,
    pub today: String,
}

/// Dashboard page handler. Salon admins only; the entry never appears in a
/// regular staff member's menu, and the page itself enforces the same rule.
#[instrument(skip(staff, salon, state))]
pub async fn dashboard(
    RequireStaffAuth(staff): RequireStaffAuth,
    SalonScope(salon): SalonScope,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    if !staff.role.is_admin() {
        return Err(AppError::Forbidden(
            "the dashboard is for salon admins".to_owned(),
        ));
    }

    let nav = settings_navigation(
        staff.role,
        Some(&staff.email),
        &state.config().platform_admins,
    );

    Ok(DashboardTemplate {
        staff: StaffView::from(&staff),
        salon: SalonView::from(&salon),
        nav,
        today: chrono::Utc::now().format("%A, %B %e").to_string(),
    })
}
