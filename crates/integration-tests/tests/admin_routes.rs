//! Integration tests for the staff dashboard router.
//!
//! Drives the real router in-process. Identity arrives the way the proxy
//! delivers it: as request headers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use fisherman_admin::middleware::auth::headers;
use fisherman_admin::{middleware, routes, state::AppState};
use fisherman_integration_tests::test_admin_config;

/// Build the admin app exactly as the binary does (minus Sentry).
fn app() -> Router {
    let config = test_admin_config();
    let state = AppState::new(config).expect("state builds");
    let session_layer = middleware::create_session_layer(state.config());
    routes::router().layer(session_layer).with_state(state)
}

fn staff_request(uri: &str, email: &str, role: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(headers::EMAIL, email)
        .header(headers::NAME, "Ana")
        .header(headers::ROLE, role)
        .header(headers::SALON_ID, "S1")
        .header(headers::SALON_NAME, "Shear Bliss")
        .body(Body::empty())
        .expect("request")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn settings_requires_identity_headers() {
    let response = app()
        .oneshot(Request::builder().uri("/settings").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn staff_settings_menu_has_base_entries_only() {
    let response = app()
        .oneshot(staff_request("/settings", "ana@shearbliss.example", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    for entry in [
        "Providers",
        "Services",
        "Clients",
        "Notifications",
        "Profile",
        "Links",
        "Team Management",
        "Billing",
    ] {
        assert!(body.contains(entry), "menu missing {entry}");
    }
    assert!(!body.contains("Staff Schedule"));
    assert!(!body.contains("Platform Admin"));
}

#[tokio::test]
async fn admin_settings_menu_adds_schedule_and_dashboard() {
    let response = app()
        .oneshot(staff_request("/settings", "ana@shearbliss.example", "admin"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Staff Schedule"));
    assert!(body.contains("/dashboard"));
    assert!(!body.contains("Platform Admin"));
}

#[tokio::test]
async fn allowlisted_email_sees_platform_admin_entry() {
    let response = app()
        .oneshot(staff_request("/settings", "ameet@gofisherman.com", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Platform Admin"));
}

#[tokio::test]
async fn unknown_settings_section_is_404() {
    let response = app()
        .oneshot(staff_request("/settings/payroll", "ana@shearbliss.example", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn schedule_section_is_admin_only() {
    let response = app()
        .oneshot(staff_request("/settings/schedule", "ana@shearbliss.example", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app()
        .oneshot(staff_request("/settings/schedule", "ana@shearbliss.example", "admin"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn links_section_shows_booking_url() {
    let request = Request::builder()
        .uri("/settings/links")
        .header(headers::EMAIL, "ana@shearbliss.example")
        .header(headers::ROLE, "staff")
        .header(headers::SALON_SLUG, "shear-bliss")
        .body(Body::empty())
        .expect("request");

    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("http://localhost:3000/booking/shear-bliss"));
}

#[tokio::test]
async fn dashboard_rejects_regular_staff() {
    let response = app()
        .oneshot(staff_request("/dashboard", "ana@shearbliss.example", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dashboard_renders_for_salon_admins() {
    let response = app()
        .oneshot(staff_request("/dashboard", "ana@shearbliss.example", "admin"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Shear Bliss"));
}

#[tokio::test]
async fn platform_area_rejects_non_operators() {
    let response = app()
        .oneshot(staff_request("/platform", "ana@shearbliss.example", "admin"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn platform_area_allows_operators() {
    let response = app()
        .oneshot(staff_request("/platform", "ameet@gofisherman.com", "staff"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
