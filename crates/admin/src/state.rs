//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::context::SalonContextCache;
use crate::services::billing::StripeClient;
use crate::services::email::MailjetClient;
use crate::services::sms::SmsClient;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("billing client: {0}")]
    Billing(#[from] crate::services::billing::StripeError),
    #[error("email client: {0}")]
    Email(#[from] crate::services::email::MailjetError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like service clients and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    billing: StripeClient,
    mailer: MailjetClient,
    sms: SmsClient,
    salon_contexts: SalonContextCache,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a service HTTP client fails to build.
    pub fn new(config: AdminConfig) -> Result<Self, StateError> {
        let billing = StripeClient::new(&config.stripe)?;
        let mailer = MailjetClient::new(&config.mailjet)?;
        let sms = SmsClient::new(&config.mailjet);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                billing,
                mailer,
                sms,
                salon_contexts: SalonContextCache::new(),
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the Stripe billing client.
    #[must_use]
    pub fn billing(&self) -> &StripeClient {
        &self.inner.billing
    }

    /// Get a reference to the Mailjet email client.
    #[must_use]
    pub fn mailer(&self) -> &MailjetClient {
        &self.inner.mailer
    }

    /// Get a reference to the Mailjet SMS client.
    #[must_use]
    pub fn sms(&self) -> &SmsClient {
        &self.inner.sms
    }

    /// Get a reference to the salon-context cache.
    #[must_use]
    pub fn salon_contexts(&self) -> &SalonContextCache {
        &self.inner.salon_contexts
    }
}
