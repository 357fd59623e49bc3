//! Salon index page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// A salon entry on the index page.
#[derive(Debug, Clone)]
pub struct SalonListing {
    pub name: String,
    pub description: String,
    pub booking_path: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub salons: Vec<SalonListing>,
}

/// Home page: every salon with a public booking page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let salons = state
        .salons()
        .all()
        .into_iter()
        .map(|salon| SalonListing {
            name: salon.name.clone(),
            description: salon.description.clone().unwrap_or_default(),
            booking_path: format!("/booking/{}", urlencoding::encode(salon.slug.as_str())),
        })
        .collect();

    Ok(HomeTemplate { salons })
}
