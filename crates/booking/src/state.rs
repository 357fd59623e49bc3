//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BookingSiteConfig;
use crate::content::{ContentError, SalonDirectory};
use crate::services::notify::{NotifyClient, NotifyError};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("salon content: {0}")]
    Content(#[from] ContentError),
    #[error("notify client: {0}")]
    Notify(#[from] NotifyError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the salon directory and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BookingSiteConfig,
    salons: SalonDirectory,
    notify: NotifyClient,
}

impl AppState {
    /// Create a new application state from configuration.
    ///
    /// Loads the salon directory from disk and builds the notification
    /// client.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be read or the
    /// HTTP client fails to build.
    pub fn new(config: BookingSiteConfig) -> Result<Self, StateError> {
        let salons = SalonDirectory::load(&config.content_dir)?;
        let notify = NotifyClient::new(&config.mailjet)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                salons,
                notify,
            }),
        })
    }

    /// Get a reference to the booking site configuration.
    #[must_use]
    pub fn config(&self) -> &BookingSiteConfig {
        &self.inner.config
    }

    /// Get a reference to the salon directory.
    #[must_use]
    pub fn salons(&self) -> &SalonDirectory {
        &self.inner.salons
    }

    /// Get a reference to the notification client.
    #[must_use]
    pub fn notify(&self) -> &NotifyClient {
        &self.inner.notify
    }
}
