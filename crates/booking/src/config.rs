//! Booking site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MAILJET_API_KEY` / `MAILJET_SECRET_KEY` - Mailjet send credentials
//! - `MAILJET_FROM_EMAIL` - Sender address for booking notifications
//!
//! ## Optional
//! - `FISHERMAN_ENV` - `development` (default) or `production`
//! - `BOOKING_HOST` - Bind address (default: 127.0.0.1)
//! - `BOOKING_PORT` - Listen port (default: 3000)
//! - `BOOKING_BASE_URL` - Override for canonical booking links
//! - `SALON_CONTENT_DIR` - Salon profile directory
//!   (default: crates/booking/content)
//! - `MAILJET_FROM_NAME` - Sender display name (default: `Fisherman`)
//! - `MAILJET_SMS_TOKEN` - Bearer token for the Mailjet SMS API
//! - `SENTRY_DSN` / `SENTRY_ENVIRONMENT` - Error tracking

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use fisherman_core::{BookingUrls, Email, Environment};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Booking site configuration.
#[derive(Debug, Clone)]
pub struct BookingSiteConfig {
    /// Deployment environment (selects the canonical booking host).
    pub environment: Environment,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Canonical booking URL builder
    pub urls: BookingUrls,
    /// Directory holding per-salon profile files
    pub content_dir: PathBuf,
    /// Mailjet configuration for booking notifications
    pub mailjet: MailjetConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment label
    pub sentry_environment: Option<String>,
}

/// Mailjet configuration for booking-request notifications.
///
/// Implements `Debug` manually to redact credentials.
#[derive(Clone)]
pub struct MailjetConfig {
    /// API key (acts as the basic-auth username)
    pub api_key: String,
    /// API secret (acts as the basic-auth password)
    pub secret_key: SecretString,
    /// Bearer token for the SMS API, if SMS notifications are enabled
    pub sms_token: Option<SecretString>,
    /// Sender address for booking notifications
    pub from_email: Email,
    /// Sender display name
    pub from_name: String,
}

impl std::fmt::Debug for MailjetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailjetConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("sms_token", &self.sms_token.as_ref().map(|_| "[REDACTED]"))
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl BookingSiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = Environment::parse(&get_env_or_default("FISHERMAN_ENV", "development"));
        let host = get_env_or_default("BOOKING_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOOKING_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("BOOKING_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BOOKING_PORT".to_owned(), e.to_string()))?;

        let urls = get_optional_env("BOOKING_BASE_URL").map_or_else(
            || BookingUrls::for_environment(environment),
            BookingUrls::with_base,
        );

        let content_dir =
            PathBuf::from(get_env_or_default("SALON_CONTENT_DIR", "crates/booking/content"));

        let mailjet = MailjetConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            environment,
            host,
            port,
            urls,
            content_dir,
            mailjet,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl MailjetConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let from_raw = get_required_env("MAILJET_FROM_EMAIL")?;
        let from_email = Email::parse(&from_raw).map_err(|e| {
            ConfigError::InvalidEnvVar("MAILJET_FROM_EMAIL".to_owned(), e.to_string())
        })?;

        Ok(Self {
            api_key: get_required_env("MAILJET_API_KEY")?,
            secret_key: SecretString::from(get_required_env("MAILJET_SECRET_KEY")?),
            sms_token: get_optional_env("MAILJET_SMS_TOKEN").map(SecretString::from),
            from_email,
            from_name: get_env_or_default("MAILJET_FROM_NAME", "Fisherman"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
