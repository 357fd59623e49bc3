//! Settings routes.
//!
//! The settings area is the salon's home for day-to-day management. The
//! menu is recomputed per request from the staff member's role and email;
//! section pages render inside the shared settings shell.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use fisherman_core::{Email, SalonSlug};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::auth::headers;
use crate::middleware::{RequireStaffAuth, SalonScope};
use crate::navigation::{NavItem, settings_navigation};
use crate::state::AppState;

use super::dashboard::{SalonView, StaffView};

/// Build the settings router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(settings_page))
        .route("/settings/{section}", get(section_page))
        .route("/api/team/invite", post(invite_team_member))
}

// =============================================================================
// Sections
// =============================================================================

/// A settings section addressable under `/settings/{section}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Providers,
    Services,
    Clients,
    Notifications,
    Profile,
    Links,
    Team,
    Billing,
    Schedule,
}

impl SettingsSection {
    /// Look up a section by its path segment.
    #[must_use]
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "providers" => Some(Self::Providers),
            "services" => Some(Self::Services),
            "clients" => Some(Self::Clients),
            "notifications" => Some(Self::Notifications),
            "profile" => Some(Self::Profile),
            "links" => Some(Self::Links),
            "team" => Some(Self::Team),
            "billing" => Some(Self::Billing),
            "schedule" => Some(Self::Schedule),
            _ => None,
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Providers => "Providers",
            Self::Services => "Services",
            Self::Clients => "Clients",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::Links => "Links",
            Self::Team => "Team Management",
            Self::Billing => "Billing",
            Self::Schedule => "Staff Schedule",
        }
    }

    /// Short description rendered under the heading.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Providers => "Manage the providers clients can book with.",
            Self::Services => "Manage the services on your booking menu.",
            Self::Clients => "Browse and manage your client list.",
            Self::Notifications => "Configure booking notifications and send test messages.",
            Self::Profile => "Your account details, as provided by your sign-in.",
            Self::Links => "Share your public booking page.",
            Self::Team => "Invite teammates to your salon's dashboard.",
            Self::Billing => "Manage your subscription and SMS usage.",
            Self::Schedule => "Set working hours for your staff.",
        }
    }

    /// Whether the section is restricted to salon admins.
    #[must_use]
    pub const fn admin_only(self) -> bool {
        matches!(self, Self::Schedule)
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Settings shell template, shared by the overview and every section.
#[derive(Template, WebTemplate)]
#[template(path = "settings/index.html")]
pub struct SettingsTemplate {
    pub staff: StaffView,
    pub salon: SalonView,
    pub nav: Vec<NavItem>,
    pub section_title: String,
    pub section_description: String,
    /// Public booking URL, shown in the Links section.
    pub booking_url: Option<String>,
}

// =============================================================================
// Page handlers
// =============================================================================

/// Settings overview page.
#[instrument(skip(staff, salon, state))]
pub async fn settings_page(
    RequireStaffAuth(staff): RequireStaffAuth,
    SalonScope(salon): SalonScope,
    State(state): State<AppState>,
) -> Result<SettingsTemplate> {
    let nav = settings_navigation(
        staff.role,
        Some(&staff.email),
        &state.config().platform_admins,
    );

    Ok(SettingsTemplate {
        staff: StaffView::from(&staff),
        salon: SalonView::from(&salon),
        nav,
        section_title: "Settings".to_owned(),
        section_description: "Manage your salon from the sections on the left.".to_owned(),
        booking_url: None,
    })
}

/// Settings section page. Unknown sections 404; admin-only sections are
/// hidden from regular staff menus and rejected here as well.
#[instrument(skip(staff, salon, state, header_map))]
pub async fn section_page(
    RequireStaffAuth(staff): RequireStaffAuth,
    SalonScope(salon): SalonScope,
    State(state): State<AppState>,
    header_map: HeaderMap,
    Path(section): Path<String>,
) -> Result<SettingsTemplate> {
    let section = SettingsSection::from_path(&section)
        .ok_or_else(|| AppError::NotFound(format!("no settings section named {section}")))?;

    if section.admin_only() && !staff.role.is_admin() {
        return Err(AppError::Forbidden(
            "this section is for salon admins".to_owned(),
        ));
    }

    let booking_url = match section {
        SettingsSection::Links => Some(booking_url_for(&state, &header_map)),
        _ => None,
    };

    let nav = settings_navigation(
        staff.role,
        Some(&staff.email),
        &state.config().platform_admins,
    );

    Ok(SettingsTemplate {
        staff: StaffView::from(&staff),
        salon: SalonView::from(&salon),
        nav,
        section_title: section.title().to_owned(),
        section_description: section.description().to_owned(),
        booking_url,
    })
}

/// The salon's public booking URL, falling back to the site base when the
/// identity provider didn't supply a slug.
fn booking_url_for(state: &AppState, header_map: &HeaderMap) -> String {
    let urls = &state.config().booking_urls;
    header_map
        .get(headers::SALON_SLUG)
        .and_then(|value| value.to_str().ok())
        .map_or_else(
            || urls.base().to_owned(),
            |slug| urls.booking_url(&SalonSlug::from(slug)),
        )
}

// =============================================================================
// Team API
// =============================================================================

/// Request to invite a teammate.
#[derive(Debug, Deserialize)]
pub struct InviteTeamMemberRequest {
    pub email: String,
    pub name: String,
}

/// Response after sending an invitation.
#[derive(Debug, Serialize)]
pub struct InviteTeamMemberResponse {
    pub success: bool,
    pub email: String,
}

/// Send a staff invitation email for this salon.
#[instrument(skip(staff, salon, state, request))]
pub async fn invite_team_member(
    RequireStaffAuth(staff): RequireStaffAuth,
    SalonScope(salon): SalonScope,
    State(state): State<AppState>,
    Json(request): Json<InviteTeamMemberRequest>,
) -> Result<Json<InviteTeamMemberResponse>> {
    if !staff.role.is_admin() {
        return Err(AppError::Forbidden(
            "only salon admins can invite teammates".to_owned(),
        ));
    }

    let to = Email::parse(&request.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;
    let salon_name = salon
        .salon_name
        .unwrap_or_else(|| "your salon".to_owned());

    state
        .mailer()
        .send_staff_invite(&to, &request.name, &salon_name, &state.config().base_url)
        .await?;

    Ok(Json(InviteTeamMemberResponse {
        success: true,
        email: to.into_inner(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_lookup_matches_nav_hrefs() {
        // Every /settings/... entry produced by the navigation resolver
        // must resolve to a section page.
        for segment in [
            "providers",
            "services",
            "clients",
            "notifications",
            "profile",
            "links",
            "team",
            "billing",
            "schedule",
        ] {
            assert!(
                SettingsSection::from_path(segment).is_some(),
                "missing section for {segment}"
            );
        }
        assert!(SettingsSection::from_path("unknown").is_none());
    }

    #[test]
    fn test_only_schedule_is_admin_only() {
        assert!(SettingsSection::Schedule.admin_only());
        assert!(!SettingsSection::Billing.admin_only());
        assert!(!SettingsSection::Team.admin_only());
    }
}
