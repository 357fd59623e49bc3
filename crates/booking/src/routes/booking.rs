//! Salon booking pages and request submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use fisherman_core::SalonSlug;

use crate::content::SalonProfile;
use crate::error::{AppError, Result};
use crate::services::notify::BookingRequest;
use crate::state::AppState;

/// A bookable service for template rendering.
#[derive(Debug, Clone)]
pub struct ServiceView {
    pub name: String,
    pub duration: String,
    pub price: String,
}

/// Salon view for the booking templates.
#[derive(Debug, Clone)]
pub struct SalonPageView {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub services: Vec<ServiceView>,
}

impl From<&SalonProfile> for SalonPageView {
    fn from(salon: &SalonProfile) -> Self {
        Self {
            slug: salon.slug.to_string(),
            name: salon.name.clone(),
            description: salon.description.clone().unwrap_or_default(),
            services: salon
                .services
                .iter()
                .map(|service| ServiceView {
                    name: service.name.clone(),
                    duration: format!("{} min", service.duration_minutes),
                    price: service.price.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Booking page template.
#[derive(Template, WebTemplate)]
#[template(path = "booking/show.html")]
pub struct BookingTemplate {
    pub salon: SalonPageView,
}

/// Confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "booking/confirmed.html")]
pub struct ConfirmedTemplate {
    pub salon: SalonPageView,
}

/// Look up a salon or 404.
fn find_salon(state: &AppState, slug: &str) -> Result<SalonProfile> {
    state
        .salons()
        .get(&SalonSlug::from(slug))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("no salon at /booking/{slug}")))
}

/// Salon booking page.
#[instrument(skip(state))]
pub async fn booking_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<BookingTemplate> {
    let salon = find_salon(&state, &slug)?;
    Ok(BookingTemplate {
        salon: SalonPageView::from(&salon),
    })
}

/// Booking request form fields.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub service: String,
    pub preferred_time: String,
}

impl BookingForm {
    /// Validate the form into a notification-ready request.
    fn into_request(self) -> std::result::Result<BookingRequest, String> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err("name is required".to_owned());
        }

        let email = self.email.trim().to_owned();
        if fisherman_core::Email::parse(&email).is_err() {
            return Err("a valid email is required".to_owned());
        }

        let service = self.service.trim().to_owned();
        if service.is_empty() {
            return Err("pick a service".to_owned());
        }

        let preferred_time = self.preferred_time.trim().to_owned();
        if preferred_time.is_empty() {
            return Err("let the salon know when suits you".to_owned());
        }

        let phone = self.phone.trim();
        Ok(BookingRequest {
            client_name: name,
            client_email: email,
            client_phone: (!phone.is_empty()).then(|| phone.to_owned()),
            service,
            preferred_time,
        })
    }
}

/// Submit a booking request: validate, notify the salon, redirect.
#[instrument(skip(state, form), fields(slug = %slug))]
pub async fn submit_booking(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(form): Form<BookingForm>,
) -> Result<Redirect> {
    let salon = find_salon(&state, &slug)?;

    let request = form.into_request().map_err(AppError::BadRequest)?;

    // The requested service must be one the salon actually offers.
    if !salon.services.iter().any(|s| s.name == request.service) {
        return Err(AppError::BadRequest(format!(
            "{} does not offer \"{}\"",
            salon.name, request.service
        )));
    }

    state.notify().notify_salon(&salon, &request).await?;

    tracing::info!(salon = %salon.slug, "Booking request submitted");
    Ok(Redirect::to(&format!(
        "/booking/{}/confirmed",
        urlencoding::encode(&slug)
    )))
}

/// Confirmation page after a booking request was sent.
#[instrument(skip(state))]
pub async fn confirmed_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ConfirmedTemplate> {
    let salon = find_salon(&state, &slug)?;
    Ok(ConfirmedTemplate {
        salon: SalonPageView::from(&salon),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, service: &str, time: &str) -> BookingForm {
        BookingForm {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: String::new(),
            service: service.to_owned(),
            preferred_time: time.to_owned(),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let request = form("Ana", "ana@example.com", "Women's cut", "Friday afternoon")
            .into_request()
            .expect("valid form");
        assert_eq!(request.client_name, "Ana");
        assert_eq!(request.client_phone, None);
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(form("", "ana@example.com", "Cut", "Friday").into_request().is_err());
        assert!(form("Ana", "not-an-email", "Cut", "Friday").into_request().is_err());
        assert!(form("Ana", "ana@example.com", "", "Friday").into_request().is_err());
        assert!(form("Ana", "ana@example.com", "Cut", "  ").into_request().is_err());
    }

    #[test]
    fn test_phone_is_optional_but_kept() {
        let mut f = form("Ana", "ana@example.com", "Cut", "Friday");
        f.phone = " +15550100 ".to_owned();
        let request = f.into_request().expect("valid form");
        assert_eq!(request.client_phone.as_deref(), Some("+15550100"));
    }
}
