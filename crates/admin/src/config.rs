//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_BASE_URL` - Public URL the dashboard is served on
//! - `ADMIN_SESSION_SECRET` - Session signing secret (min 32 chars)
//! - `STRIPE_SECRET_KEY` - Stripe API secret key
//! - `STRIPE_PRICE_ID` - Price for the salon subscription checkout
//! - `MAILJET_API_KEY` / `MAILJET_SECRET_KEY` - Mailjet send credentials
//! - `MAILJET_FROM_EMAIL` - Sender address for transactional mail
//!
//! ## Optional
//! - `FISHERMAN_ENV` - `development` (default) or `production`
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `PLATFORM_ADMIN_EMAILS` - Comma-separated platform operator emails
//!   (defaults to the production operator list)
//! - `BOOKING_BASE_URL` - Override for public booking links
//! - `STRIPE_SMS_METER` - Billing meter event name for SMS usage
//!   (default: `sms_segments`)
//! - `MAILJET_FROM_NAME` - Sender display name (default: `Fisherman`)
//! - `MAILJET_SMS_TOKEN` - Bearer token for the Mailjet SMS API
//! - `SENTRY_DSN` / `SENTRY_ENVIRONMENT` - Error tracking

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

use fisherman_core::{BookingUrls, Email, Environment};

use crate::navigation::PlatformAdminList;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Platform operator emails used when `PLATFORM_ADMIN_EMAILS` is unset.
const DEFAULT_PLATFORM_ADMIN_EMAILS: &[&str] =
    &["ameet@gofisherman.com", "support@gofisherman.com"];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Deployment environment (selects the public booking host).
    pub environment: Environment,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Emails authorized for the Platform Admin area
    pub platform_admins: PlatformAdminList,
    /// Public booking URL builder
    pub booking_urls: BookingUrls,
    /// Stripe billing configuration
    pub stripe: StripeConfig,
    /// Mailjet email/SMS configuration
    pub mailjet: MailjetConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment label
    pub sentry_environment: Option<String>,
}

/// Stripe billing configuration.
///
/// Implements `Debug` manually to redact the secret key.
#[derive(Clone)]
pub struct StripeConfig {
    /// API secret key (full account access)
    pub secret_key: SecretString,
    /// Price for the salon subscription checkout
    pub price_id: String,
    /// Billing meter event name for SMS usage recording
    pub sms_meter: String,
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &"[REDACTED]")
            .field("price_id", &self.price_id)
            .field("sms_meter", &self.sms_meter)
            .finish()
    }
}

/// Mailjet email and SMS configuration.
///
/// Implements `Debug` manually to redact credentials.
#[derive(Clone)]
pub struct MailjetConfig {
    /// API key (acts as the basic-auth username)
    pub api_key: String,
    /// API secret (acts as the basic-auth password)
    pub secret_key: SecretString,
    /// Bearer token for the SMS API, if SMS is enabled
    pub sms_token: Option<SecretString>,
    /// Sender address for transactional mail
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

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the session secret fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = Environment::parse(&get_env_or_default("FISHERMAN_ENV", "development"));
        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_owned(), e.to_string()))?;
        let base_url = get_required_env("ADMIN_BASE_URL")?;
        let session_secret = get_required_secret("ADMIN_SESSION_SECRET")?;
        validate_session_secret(&session_secret, "ADMIN_SESSION_SECRET")?;

        let platform_admins = match get_optional_env("PLATFORM_ADMIN_EMAILS") {
            Some(raw) => parse_admin_emails(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("PLATFORM_ADMIN_EMAILS".to_owned(), e))?,
            None => default_platform_admins(),
        };

        let booking_urls = get_optional_env("BOOKING_BASE_URL").map_or_else(
            || BookingUrls::for_environment(environment),
            BookingUrls::with_base,
        );

        let stripe = StripeConfig::from_env()?;
        let mailjet = MailjetConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            environment,
            host,
            port,
            base_url,
            session_secret,
            platform_admins,
            booking_urls,
            stripe,
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

impl StripeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret_key: get_required_secret("STRIPE_SECRET_KEY")?,
            price_id: get_required_env("STRIPE_PRICE_ID")?,
            sms_meter: get_env_or_default("STRIPE_SMS_METER", "sms_segments"),
        })
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
            secret_key: get_required_secret("MAILJET_SECRET_KEY")?,
            sms_token: get_optional_env("MAILJET_SMS_TOKEN").map(SecretString::from),
            from_email,
            from_name: get_env_or_default("MAILJET_FROM_NAME", "Fisherman"),
        })
    }
}

/// The built-in platform operator allow-list.
#[must_use]
pub fn default_platform_admins() -> PlatformAdminList {
    let emails = DEFAULT_PLATFORM_ADMIN_EMAILS
        .iter()
        .filter_map(|raw| Email::parse(raw).ok())
        .collect();
    PlatformAdminList::new(emails)
}

/// Parse a comma-separated list of operator emails.
fn parse_admin_emails(raw: &str) -> Result<PlatformAdminList, String> {
    let mut emails = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let email = Email::parse(part).map_err(|e| format!("{part}: {e}"))?;
        emails.push(email);
    }
    Ok(PlatformAdminList::new(emails))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    use secrecy::ExposeSecret;

    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_owned(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_platform_admins_has_two_entries() {
        let list = default_platform_admins();
        assert_eq!(list.emails().len(), 2);
        assert!(list.contains(&Email::parse("ameet@gofisherman.com").unwrap()));
        assert!(list.contains(&Email::parse("support@gofisherman.com").unwrap()));
    }

    #[test]
    fn test_parse_admin_emails_trims_and_skips_blanks() {
        let list = parse_admin_emails(" a@b.c , ,d@e.f,").unwrap();
        assert_eq!(list.emails().len(), 2);
        assert!(list.contains(&Email::parse("a@b.c").unwrap()));
        assert!(list.contains(&Email::parse("d@e.f").unwrap()));
    }

    #[test]
    fn test_parse_admin_emails_rejects_invalid() {
        assert!(parse_admin_emails("not-an-email").is_err());
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("x".repeat(32));
        assert!(validate_session_secret(&secret, "TEST_SESSION").is_ok());
    }

    #[test]
    fn test_stripe_config_debug_redacts_secret() {
        let config = StripeConfig {
            secret_key: SecretString::from("sk_test_supersecret"),
            price_id: "price_123".to_owned(),
            sms_meter: "sms_segments".to_owned(),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("price_123"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk_test_supersecret"));
    }

    #[test]
    fn test_mailjet_config_debug_redacts_secrets() {
        let config = MailjetConfig {
            api_key: "public_key".to_owned(),
            secret_key: SecretString::from("private_key"),
            sms_token: Some(SecretString::from("sms_token_value")),
            from_email: Email::parse("no-reply@gofisherman.com").unwrap(),
            from_name: "Fisherman".to_owned(),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("public_key"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("private_key"));
        assert!(!debug_output.contains("sms_token_value"));
    }
}
