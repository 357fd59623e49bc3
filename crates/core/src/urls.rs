//! Public booking URL construction.
//!
//! Booking pages live on the public site at `{base}/booking/{slug}`. The
//! base host differs between local development and production, so callers
//! pick it once from the deployment environment (or a config override) and
//! build URLs from there. Pure string construction - nothing here performs
//! I/O.

use serde::{Deserialize, Serialize};

use crate::types::SalonSlug;

/// Deployment environment, used to select the public booking host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local development: booking site on localhost.
    #[default]
    Development,
    /// Production: the public booking domain.
    Production,
}

impl Environment {
    /// Parse an environment name.
    ///
    /// Accepts `"production"`/`"prod"` for production; anything else
    /// (including the empty string) is development, so a missing or
    /// misspelled value can never point links at the production domain.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether this is the production environment.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Builder for fully-qualified public booking URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingUrls {
    base: String,
}

impl BookingUrls {
    /// Base URL of the booking site in local development.
    pub const DEV_BASE_URL: &'static str = "http://localhost:3000";

    /// Base URL of the public booking site in production.
    pub const PROD_BASE_URL: &'static str = "https://gofisherman.com";

    /// Select the booking base URL for a deployment environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        let base = match environment {
            Environment::Development => Self::DEV_BASE_URL,
            Environment::Production => Self::PROD_BASE_URL,
        };
        Self {
            base: base.to_owned(),
        }
    }

    /// Use an explicit base URL (config override). Trailing slashes are
    /// stripped so joining never produces `//booking/...`.
    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// The base URL links are built against.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fully-qualified booking URL for a salon slug.
    ///
    /// The slug is percent-encoded: slugs come from salon configuration and
    /// must land in a single path segment whatever they contain.
    #[must_use]
    pub fn booking_url(&self, slug: &SalonSlug) -> String {
        format!("{}/booking/{}", self.base, urlencoding::encode(slug.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("prod"), Environment::Production);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
    }

    #[test]
    fn test_base_selection_by_environment() {
        let dev = BookingUrls::for_environment(Environment::Development);
        let prod = BookingUrls::for_environment(Environment::Production);
        assert_eq!(dev.base(), BookingUrls::DEV_BASE_URL);
        assert_eq!(prod.base(), BookingUrls::PROD_BASE_URL);
    }

    #[test]
    fn test_booking_url_shape() {
        let urls = BookingUrls::for_environment(Environment::Production);
        assert_eq!(
            urls.booking_url(&SalonSlug::from("shear-bliss")),
            "https://gofisherman.com/booking/shear-bliss"
        );
    }

    #[test]
    fn test_booking_url_encodes_slug() {
        let urls = BookingUrls::for_environment(Environment::Development);
        assert_eq!(
            urls.booking_url(&SalonSlug::from("côté coiffure & spa")),
            "http://localhost:3000/booking/c%C3%B4t%C3%A9%20coiffure%20%26%20spa"
        );
    }

    #[test]
    fn test_with_base_strips_trailing_slash() {
        let urls = BookingUrls::with_base("https://staging.gofisherman.com/");
        assert_eq!(
            urls.booking_url(&SalonSlug::from("shear-bliss")),
            "https://staging.gofisherman.com/booking/shear-bliss"
        );
    }

    #[test]
    fn test_idempotent_for_equal_inputs() {
        let urls = BookingUrls::for_environment(Environment::Production);
        let slug = SalonSlug::from("shear-bliss");
        assert_eq!(urls.booking_url(&slug), urls.booking_url(&slug));
    }
}
