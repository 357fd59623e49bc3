//! Authentication extractors for the staff dashboard.
//!
//! The dashboard runs behind an identity-aware proxy which authenticates
//! staff and forwards their identity as request headers (and strips any
//! client-supplied values for those headers). Extractors here turn those
//! headers - plus the session-held impersonation selection - into typed
//! request context.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use fisherman_core::{Email, SalonId, StaffRole};

use crate::context::{AuthContext, SalonContext};
use crate::models::{CurrentStaff, session_keys};
use crate::state::AppState;

/// Identity headers set by the authentication proxy.
pub mod headers {
    /// Authenticated staff email.
    pub const EMAIL: &str = "x-auth-request-email";
    /// Staff display name.
    pub const NAME: &str = "x-auth-request-user";
    /// Staff role within their salon.
    pub const ROLE: &str = "x-auth-request-role";
    /// The staff member's salon ID.
    pub const SALON_ID: &str = "x-auth-request-salon-id";
    /// The staff member's salon display name.
    pub const SALON_NAME: &str = "x-auth-request-salon-name";
    /// The salon's public booking slug.
    pub const SALON_SLUG: &str = "x-auth-request-salon-slug";
}

/// Rejection for requests that arrive without a usable staff identity.
///
/// The proxy should make this unreachable for browsers; anything that gets
/// here is a direct request and receives a plain 401.
pub struct StaffAuthRejection;

impl IntoResponse for StaffAuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "staff identity required").into_response()
    }
}

/// Extractor that requires an authenticated staff member.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireStaffAuth(staff): RequireStaffAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", staff.name)
/// }
/// ```
pub struct RequireStaffAuth(pub CurrentStaff);

impl<S> FromRequestParts<S> for RequireStaffAuth
where
    S: Send + Sync,
{
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        staff_from_headers(parts).map(Self).ok_or(StaffAuthRejection)
    }
}

/// Extractor that requires a platform operator.
///
/// Matches the authenticated email against the configured allow-list;
/// authenticated non-operators receive 403.
pub struct RequirePlatformAdmin(pub CurrentStaff);

/// Rejection for the platform-admin extractor.
pub enum PlatformAdminRejection {
    /// No usable staff identity at all.
    Unauthenticated,
    /// Authenticated, but not on the operator allow-list.
    NotAnOperator,
}

impl IntoResponse for PlatformAdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => StaffAuthRejection.into_response(),
            Self::NotAnOperator => {
                (StatusCode::FORBIDDEN, "platform operators only").into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequirePlatformAdmin {
    type Rejection = PlatformAdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let staff = staff_from_headers(parts).ok_or(PlatformAdminRejection::Unauthenticated)?;
        if !state.config().platform_admins.contains(&staff.email) {
            return Err(PlatformAdminRejection::NotAnOperator);
        }
        Ok(Self(staff))
    }
}

/// Extractor resolving the effective salon context for the request.
///
/// Combines the proxy's salon headers, the operator allow-list, and the
/// session-held impersonation selection into a resolved [`SalonContext`]
/// via the state's value-equality cache.
pub struct SalonScope(pub SalonContext);

impl FromRequestParts<AppState> for SalonScope {
    type Rejection = StaffAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let staff = staff_from_headers(parts).ok_or(StaffAuthRejection)?;

        let selected_salon_id = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<String>(session_keys::SELECTED_SALON)
                .await
                .ok()
                .flatten()
                .map(SalonId::new),
            None => None,
        };

        let auth = AuthContext {
            current_salon_id: header_value(parts, headers::SALON_ID).map(SalonId::new),
            current_salon_name: header_value(parts, headers::SALON_NAME),
            is_platform_admin: state.config().platform_admins.contains(&staff.email),
            selected_salon_id,
        };

        Ok(Self(state.salon_contexts().resolve(&auth)))
    }
}

/// Read a header as an owned string, ignoring non-UTF-8 values.
fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Build the staff identity from the proxy headers.
///
/// The email header is the only hard requirement; a missing name falls
/// back to the email local part and a missing or unknown role is regular
/// staff.
fn staff_from_headers(parts: &Parts) -> Option<CurrentStaff> {
    let email = Email::parse(&header_value(parts, headers::EMAIL)?).ok()?;
    let name = header_value(parts, headers::NAME)
        .unwrap_or_else(|| email.local_part().to_owned());
    let role = header_value(parts, headers::ROLE)
        .map(|raw| StaffRole::parse(&raw))
        .unwrap_or_default();

    Some(CurrentStaff { email, name, role })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/settings");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (parts, ()) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[test]
    fn test_staff_from_headers_complete() {
        let parts = parts_with(&[
            (headers::EMAIL, "ana@shearbliss.example"),
            (headers::NAME, "Ana"),
            (headers::ROLE, "admin"),
        ]);
        let staff = staff_from_headers(&parts).unwrap();
        assert_eq!(staff.email.as_str(), "ana@shearbliss.example");
        assert_eq!(staff.name, "Ana");
        assert_eq!(staff.role, StaffRole::Admin);
    }

    #[test]
    fn test_staff_from_headers_defaults() {
        let parts = parts_with(&[(headers::EMAIL, "ana@shearbliss.example")]);
        let staff = staff_from_headers(&parts).unwrap();
        assert_eq!(staff.name, "ana");
        assert_eq!(staff.role, StaffRole::Staff);
    }

    #[test]
    fn test_staff_from_headers_requires_valid_email() {
        assert!(staff_from_headers(&parts_with(&[])).is_none());
        assert!(staff_from_headers(&parts_with(&[(headers::EMAIL, "not-an-email")])).is_none());
    }

    #[test]
    fn test_unknown_role_header_is_staff() {
        let parts = parts_with(&[
            (headers::EMAIL, "ana@shearbliss.example"),
            (headers::ROLE, "superuser"),
        ]);
        assert_eq!(staff_from_headers(&parts).unwrap().role, StaffRole::Staff);
    }
}
