//! Mailjet client for transactional email.
//!
//! Sends via the `v3.1/send` API with basic-auth credentials, rendering
//! HTML and plain-text bodies from Askama templates.

use askama::Template;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use fisherman_core::Email;

use crate::config::MailjetConfig;

/// Mailjet send API endpoint.
const SEND_URL: &str = "https://api.mailjet.com/v3.1/send";

/// HTML template for the staff invitation email.
#[derive(Template)]
#[template(path = "email/staff_invite.html")]
struct StaffInviteHtml<'a> {
    name: &'a str,
    salon_name: &'a str,
    dashboard_url: &'a str,
}

/// Plain text template for the staff invitation email.
#[derive(Template)]
#[template(path = "email/staff_invite.txt")]
struct StaffInviteText<'a> {
    name: &'a str,
    salon_name: &'a str,
    dashboard_url: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum MailjetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// One of the messages in the batch was rejected.
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

/// Mailjet transactional email client.
#[derive(Clone)]
pub struct MailjetClient {
    client: reqwest::Client,
    api_key: String,
    secret_key: SecretString,
    from_email: Email,
    from_name: String,
}

impl MailjetClient {
    /// Create a new Mailjet email client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &MailjetConfig) -> Result<Self, MailjetError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }

    /// Send a staff invitation for joining a salon's team.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send or a template fails to
    /// render.
    pub async fn send_staff_invite(
        &self,
        to: &Email,
        name: &str,
        salon_name: &str,
        dashboard_url: &str,
    ) -> Result<(), MailjetError> {
        let html = StaffInviteHtml {
            name,
            salon_name,
            dashboard_url,
        }
        .render()?;
        let text = StaffInviteText {
            name,
            salon_name,
            dashboard_url,
        }
        .render()?;

        self.send(
            to,
            name,
            &format!("You've been invited to join {salon_name} on Fisherman"),
            &text,
            Some(&html),
        )
        .await
    }

    /// Send a plain-text test message to verify the salon's email setup.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send.
    pub async fn send_test_email(&self, to: &Email) -> Result<(), MailjetError> {
        self.send(
            to,
            to.local_part(),
            "Fisherman notification test",
            "This is a test notification from your Fisherman dashboard. \
             If you received it, email notifications are working.",
            None,
        )
        .await
    }

    /// Send a single message with text and optional HTML parts.
    async fn send(
        &self,
        to: &Email,
        to_name: &str,
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> Result<(), MailjetError> {
        let mut message = serde_json::json!({
            "From": {
                "Email": self.from_email.as_str(),
                "Name": self.from_name,
            },
            "To": [{
                "Email": to.as_str(),
                "Name": to_name,
            }],
            "Subject": subject,
            "TextPart": text_body,
        });
        if let (Some(html), Some(obj)) = (html_body, message.as_object_mut()) {
            obj.insert("HTMLPart".to_owned(), serde_json::Value::from(html));
        }

        let body = serde_json::json!({ "Messages": [message] });

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
            return Err(MailjetError::Api {
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
            return Err(MailjetError::Rejected(rejected.status.clone()));
        }

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}
