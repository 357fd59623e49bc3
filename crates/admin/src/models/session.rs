//! Request-identity types for the staff dashboard.
//!
//! Identity is established by the fronting authentication proxy; the
//! session only carries per-browser UI state (the impersonation selection).

use serde::{Deserialize, Serialize};

use fisherman_core::{Email, StaffRole};

/// The authenticated staff member, as asserted by the identity proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentStaff {
    /// Staff member's email address.
    pub email: Email,
    /// Staff member's display name.
    pub name: String,
    /// Staff member's role within their salon.
    pub role: StaffRole,
}

/// Session keys for dashboard UI state.
pub mod session_keys {
    /// Key for the salon a platform operator has selected to act as.
    pub const SELECTED_SALON: &str = "selected_salon_id";
}
