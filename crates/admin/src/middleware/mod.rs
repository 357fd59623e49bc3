//! Middleware and request extractors for the admin dashboard.

pub mod auth;
pub mod session;

pub use auth::{RequirePlatformAdmin, RequireStaffAuth, SalonScope};
pub use session::create_session_layer;
