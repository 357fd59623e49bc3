//! Integration tests for the public booking site router.
//!
//! Uses the checked-in sample salon content; booking submissions stop at
//! validation so nothing ever reaches Mailjet.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use tower::ServiceExt;

use fisherman_booking::{middleware, routes, state::AppState};
use fisherman_integration_tests::test_booking_config;

/// Build the booking app exactly as the binary does (minus Sentry).
fn app() -> Router {
    let state = AppState::new(test_booking_config()).expect("state builds");
    routes::router()
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .with_state(state)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

#[tokio::test]
async fn home_lists_sample_salons() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Shear Bliss"));
    assert!(body.contains("Atelier Hair"));
    assert!(body.contains("/booking/shear-bliss"));
}

#[tokio::test]
async fn booking_page_renders_services() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/booking/shear-bliss")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Women&#x27;s cut") || body.contains("Women's cut"));
    assert!(body.contains("Full color"));
}

#[tokio::test]
async fn unknown_salon_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/booking/no-such-salon")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_submission_validates_email() {
    let response = app()
        .oneshot(form_post(
            "/booking/shear-bliss",
            "name=Ana&email=not-an-email&service=Men%27s%20cut&preferred_time=Friday",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_submission_rejects_unoffered_service() {
    let response = app()
        .oneshot(form_post(
            "/booking/shear-bliss",
            "name=Ana&email=ana%40example.com&service=Scalp%20massage&preferred_time=Friday",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_submission_to_unknown_salon_is_404() {
    let response = app()
        .oneshot(form_post(
            "/booking/no-such-salon",
            "name=Ana&email=ana%40example.com&service=Cut&preferred_time=Friday",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let headers = response.headers();
    assert_eq!(headers.get("x-frame-options").expect("header"), "DENY");
    assert_eq!(
        headers.get("x-content-type-options").expect("header"),
        "nosniff"
    );
    assert!(headers.contains_key("content-security-policy"));
}
