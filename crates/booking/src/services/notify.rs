//! Booking-request notifications via Mailjet.
//!
//! When a client submits the booking form, the salon is notified by email
//! (and by SMS when it has a phone number on file and SMS is configured).
//! Email bodies are rendered from Askama templates; sends go through the
//! `v3.1/send` API with basic auth, SMS through `v4/sms-send` with a
//! bearer token.

use askama::Template;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::config::MailjetConfig;
use crate::content::SalonProfile;

/// Mailjet send API endpoint.
const SEND_URL: &str = "https://api.mailjet.com/v3.1/send";

/// Mailjet SMS API endpoint.
const SMS_URL: &str = "https://api.mailjet.com/v4/sms-send";

/// A validated booking request, ready to notify the salon about.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Client's name.
    pub client_name: String,
    /// Client's email, for the salon to reply to.
    pub client_email: String,
    /// Client's phone, if provided.
    pub client_phone: Option<String>,
    /// Requested service name.
    pub service: String,
    /// Free-form preferred time, as typed by the client.
    pub preferred_time: String,
}

/// HTML template for the booking-request email to the salon.
#[derive(Template)]
#[template(path = "email/booking_request.html")]
struct BookingRequestHtml<'a> {
    salon_name: &'a str,
    request: &'a BookingRequest,
}

/// Plain text template for the booking-request email to the salon.
#[derive(Template)]
#[template(path = "email/booking_request.txt")]
struct BookingRequestText<'a> {
    salon_name: &'a str,
    request: &'a BookingRequest,
}

/// Errors that can occur when notifying a salon.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The message was rejected by the API.
    #[error("Message rejected: {0}")]
    Rejected(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Per-message status from the send response.
#[derive(Debug, Deserialize)]
struct SendMessageStatus {
    #[serde(rename = "Status")]
    status: String,
}

/// Response body from the send endpoint.
#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(rename = "Messages")]
    messages: Vec<SendMessageStatus>,
}

/// Mailjet-backed notification client for the booking site.
#[derive(Clone)]
pub struct NotifyClient {
    client: reqwest::Client,
    api_key: String,
    secret_key: SecretString,
    sms_token: Option<SecretString>,
    from_email: String,
    from_name: String,
}

impl NotifyClient {
    /// Create a new notification client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &MailjetConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            sms_token: config.sms_token.clone(),
            from_email: config.from_email.to_string(),
            from_name: config.from_name.clone(),
        })
    }

    /// Notify a salon of a new booking request.
    ///
    /// Sends the email, then attempts SMS when the salon has a phone on
    /// file; an SMS failure is logged but does not fail the booking (the
    /// email already went out).
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render or send.
    pub async fn notify_salon(
        &self,
        salon: &SalonProfile,
        request: &BookingRequest,
    ) -> Result<(), NotifyError> {
        let html = BookingRequestHtml {
            salon_name: &salon.name,
            request,
        }
        .render()?;
        let text = BookingRequestText {
            salon_name: &salon.name,
            request,
        }
        .render()?;

        self.send_email(
            &salon.email,
            &salon.name,
            &format!("New booking request from {}", request.client_name),
            &text,
            &html,
        )
        .await?;

        if let Some(phone) = &salon.phone {
            let sms = format!(
                "New booking request from {} for {}. Check your inbox for details.",
                request.client_name, request.service
            );
            if let Err(e) = self.send_sms(phone, &sms).await {
                tracing::warn!(salon = %salon.slug, error = %e, "Booking SMS failed");
            }
        }

        Ok(())
    }

    /// Send a single email with text and HTML parts.
    async fn send_email(
        &self,
        to: &str,
        to_name: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), NotifyError> {
        let body = serde_json::json!({
            "Messages": [{
                "From": {
                    "Email": self.from_email,
                    "Name": self.from_name,
                },
                "To": [{
                    "Email": to,
                    "Name": to_name,
                }],
                "Subject": subject,
                "TextPart": text_body,
                "HTMLPart": html_body,
            }]
        });

        let response = self
            .client
            .post(SEND_URL)
            .basic_auth(&self.api_key, Some(self.secret_key.expose_secret()))
            .json(&body)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendResponse = response.json().await?;
        if let Some(rejected) = parsed
            .messages
            .iter()
            .find(|m| !m.status.eq_ignore_ascii_case("success"))
        {
            return Err(NotifyError::Rejected(rejected.status.clone()));
        }

        tracing::info!(to = %to, subject = %subject, "Booking email sent");
        Ok(())
    }

    /// Send a text message. No-op error when SMS is not configured.
    async fn send_sms(&self, to: &str, text: &str) -> Result<(), NotifyError> {
        let Some(token) = self.sms_token.as_ref() else {
            return Err(NotifyError::Rejected("SMS not configured".to_owned()));
        };

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
            return Err(NotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
