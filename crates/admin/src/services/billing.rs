//! Stripe API client for salon billing.
//!
//! Thin wrapper over the three billing operations the dashboard exposes:
//! starting a subscription checkout, opening the customer billing portal,
//! and recording SMS usage against a billing meter. Stripe's API is
//! form-encoded throughout.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;

use fisherman_core::Email;

use crate::config::StripeConfig;

/// Stripe API base URL.
const BASE_URL: &str = "https://api.stripe.com";

/// Errors that can occur when talking to Stripe.
#[derive(Debug, Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to build the client or parse a response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A created Checkout Session.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted payment page the browser should be sent to.
    pub url: String,
}

/// A created billing-portal session.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalSession {
    pub id: String,
    /// Hosted portal page the browser should be sent to.
    pub url: String,
}

/// A recorded billing meter event.
#[derive(Debug, Clone, Deserialize)]
pub struct MeterEvent {
    pub identifier: String,
    pub event_name: String,
}

/// Stripe API client.
#[derive(Clone)]
pub struct StripeClient {
    client: reqwest::Client,
    price_id: String,
    sms_meter: String,
}

impl StripeClient {
    /// Create a new Stripe client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &StripeConfig) -> Result<Self, StripeError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value)
            .map_err(|e| StripeError::Parse(format!("Invalid secret key format: {e}")))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            price_id: config.price_id.clone(),
            sms_meter: config.sms_meter.clone(),
        })
    }

    /// Start a subscription checkout for a salon.
    ///
    /// Returns the hosted checkout page URL to redirect the browser to.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_checkout_session(
        &self,
        customer_email: &Email,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, StripeError> {
        let params = [
            ("mode", "subscription"),
            ("line_items[0][price]", self.price_id.as_str()),
            ("line_items[0][quantity]", "1"),
            ("customer_email", customer_email.as_str()),
            ("success_url", success_url),
            ("cancel_url", cancel_url),
        ];

        self.post_form("/v1/checkout/sessions", &params).await
    }

    /// Open the customer billing portal for a salon.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, StripeError> {
        let params = [("customer", customer_id), ("return_url", return_url)];

        self.post_form("/v1/billing_portal/sessions", &params).await
    }

    /// Record SMS usage against the configured billing meter.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    pub async fn record_sms_usage(
        &self,
        customer_id: &str,
        quantity: u32,
    ) -> Result<MeterEvent, StripeError> {
        let quantity = quantity.to_string();
        let params = [
            ("event_name", self.sms_meter.as_str()),
            ("payload[stripe_customer_id]", customer_id),
            ("payload[value]", quantity.as_str()),
        ];

        self.post_form("/v1/billing/meter_events", &params).await
    }

    /// POST a form-encoded body and decode the JSON response.
    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, StripeError> {
        let url = format!("{BASE_URL}{path}");
        let response = self.client.post(&url).form(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))
    }
}
