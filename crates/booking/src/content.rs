//! Salon profile directory.
//!
//! The public site renders from read-only salon profiles: one JSON file per
//! salon in the content directory, loaded into memory at startup. A bad
//! file is logged and skipped so one broken profile never takes the site
//! down.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use fisherman_core::SalonSlug;

/// Errors that can occur while loading salon profiles.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Filesystem error reading the content directory.
    #[error("I/O error: {0}")]
    Io(String),
    /// A profile file failed to parse.
    #[error("Invalid profile {path}: {message}")]
    InvalidProfile { path: String, message: String },
}

/// A service a salon offers on its booking page.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceOffering {
    /// Display name, e.g. "Women's cut".
    pub name: String,
    /// Appointment length in minutes.
    pub duration_minutes: u32,
    /// Display price, e.g. "$65". Kept as text - pricing is informational
    /// here, payment happens in the salon.
    #[serde(default)]
    pub price: Option<String>,
}

/// A salon's public booking profile.
#[derive(Debug, Clone, Deserialize)]
pub struct SalonProfile {
    /// URL slug of the booking page.
    pub slug: SalonSlug,
    /// Display name.
    pub name: String,
    /// Address of the inbox booking requests are sent to.
    pub email: String,
    /// Phone number for SMS notifications, E.164 format.
    #[serde(default)]
    pub phone: Option<String>,
    /// Short blurb shown on the booking page.
    #[serde(default)]
    pub description: Option<String>,
    /// Services offered, in display order.
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
}

/// In-memory directory of salon profiles, keyed by slug.
#[derive(Debug, Clone)]
pub struct SalonDirectory {
    salons: Arc<HashMap<SalonSlug, SalonProfile>>,
}

impl SalonDirectory {
    /// Load all salon profiles from `{content_dir}/salons`.
    ///
    /// # Errors
    ///
    /// Returns an error if the salons directory cannot be read. Individual
    /// unparseable profiles are logged and skipped.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let dir = content_dir.join("salons");
        let mut salons = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Salon content directory does not exist: {:?}", dir);
            return Ok(Self {
                salons: Arc::new(salons),
            });
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                match Self::load_profile(&path) {
                    Ok(profile) => {
                        tracing::info!("Loaded salon profile: {}", profile.slug);
                        salons.insert(profile.slug.clone(), profile);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load salon profile {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self {
            salons: Arc::new(salons),
        })
    }

    /// Load a single profile file.
    fn load_profile(path: &Path) -> Result<SalonProfile, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| ContentError::InvalidProfile {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Look up a salon by slug.
    #[must_use]
    pub fn get(&self, slug: &SalonSlug) -> Option<&SalonProfile> {
        self.salons.get(slug)
    }

    /// All salons, sorted by display name.
    #[must_use]
    pub fn all(&self) -> Vec<&SalonProfile> {
        let mut salons: Vec<&SalonProfile> = self.salons.values().collect();
        salons.sort_by(|a, b| a.name.cmp(&b.name));
        salons
    }

    /// Number of loaded profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.salons.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.salons.is_empty()
    }
}
