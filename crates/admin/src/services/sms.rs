//! Mailjet client for SMS notifications.
//!
//! Uses the `v4/sms-send` API with a bearer token. SMS is optional: salons
//! without an SMS token configured get a clear error instead of a send.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::config::MailjetConfig;

/// Mailjet SMS API endpoint.
const SMS_URL: &str = "https://api.mailjet.com/v4/sms-send";

/// Errors that can occur when sending SMS.
#[derive(Debug, Error)]
pub enum SmsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// No SMS token configured for this deployment.
    #[error("SMS sending is not configured")]
    NotConfigured,
}

/// Mailjet SMS client.
#[derive(Clone)]
pub struct SmsClient {
    client: reqwest::Client,
    token: Option<SecretString>,
    from_name: String,
}

impl SmsClient {
    /// Create a new SMS client. A missing token leaves the client in a
    /// disabled state; sends then fail with [`SmsError::NotConfigured`].
    #[must_use]
    pub fn new(config: &MailjetConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: config.sms_token.clone(),
            from_name: config.from_name.clone(),
        }
    }

    /// Whether SMS sending is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    /// Send a text message to a phone number in E.164 format.
    ///
    /// # Errors
    ///
    /// Returns error if SMS is not configured or the API request fails.
    pub async fn send(&self, to: &str, text: &str) -> Result<(), SmsError> {
        let token = self.token.as_ref().ok_or(SmsError::NotConfigured)?;

        let body = serde_json::json!({
            "From": self.from_name,
            "To": to,
            "Text": text,
        });

        let response = self
            .client
            .post(SMS_URL)
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SmsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(to = %to, "SMS sent");
        Ok(())
    }

    /// Send a test message to verify the salon's SMS setup.
    ///
    /// # Errors
    ///
    /// Returns error if SMS is not configured or the API request fails.
    pub async fn send_test_sms(&self, to: &str) -> Result<(), SmsError> {
        self.send(
            to,
            "Fisherman test: SMS notifications are working for your salon.",
        )
        .await
    }
}
