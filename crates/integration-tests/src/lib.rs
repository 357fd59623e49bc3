//! Integration tests for Fisherman.
//!
//! The tests drive the real admin and booking routers in-process with
//! `tower::ServiceExt::oneshot` - no network listeners, no databases, and
//! no third-party calls (requests stop at validation before any vendor
//! client would send).
//!
//! # Test Categories
//!
//! - `admin_routes` - Staff dashboard: identity extraction, settings
//!   navigation, section gating
//! - `booking_site` - Public site: salon pages, form validation, security
//!   headers

use std::net::{IpAddr, Ipv4Addr};

use secrecy::SecretString;

use fisherman_admin::config::{AdminConfig, MailjetConfig, StripeConfig};
use fisherman_booking::config::{BookingSiteConfig, MailjetConfig as BookingMailjetConfig};
use fisherman_core::{BookingUrls, Email, Environment};

/// Admin configuration for in-process tests.
///
/// # Panics
///
/// Panics on invalid literals; test-only.
#[must_use]
pub fn test_admin_config() -> AdminConfig {
    AdminConfig {
        environment: Environment::Development,
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3001".to_owned(),
        session_secret: SecretString::from("integration-test-session-secret!!".to_owned()),
        platform_admins: fisherman_admin::config::default_platform_admins(),
        booking_urls: BookingUrls::for_environment(Environment::Development),
        stripe: StripeConfig {
            secret_key: SecretString::from("sk_test_123".to_owned()),
            price_id: "price_123".to_owned(),
            sms_meter: "sms_segments".to_owned(),
        },
        mailjet: MailjetConfig {
            api_key: "test-key".to_owned(),
            secret_key: SecretString::from("test-secret".to_owned()),
            sms_token: None,
            from_email: Email::parse("no-reply@gofisherman.com").expect("valid literal"),
            from_name: "Fisherman".to_owned(),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Booking site configuration pointed at the checked-in sample content.
///
/// # Panics
///
/// Panics on invalid literals; test-only.
#[must_use]
pub fn test_booking_config() -> BookingSiteConfig {
    let content_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("booking")
        .join("content");

    BookingSiteConfig {
        environment: Environment::Development,
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        urls: BookingUrls::for_environment(Environment::Development),
        content_dir,
        mailjet: BookingMailjetConfig {
            api_key: "test-key".to_owned(),
            secret_key: SecretString::from("test-secret".to_owned()),
            sms_token: None,
            from_email: Email::parse("no-reply@gofisherman.com").expect("valid literal"),
            from_name: "Fisherman".to_owned(),
        },
        sentry_dsn: None,
        sentry_environment: None,
    }
}
