//! Staff roles within a salon.

use serde::{Deserialize, Serialize};

/// Role of a staff member within their salon.
///
/// Roles arrive from the upstream identity provider as free-form strings.
/// Only the literal `"admin"` grants salon-admin capabilities; every other
/// value (including unknown or future roles) is treated as regular staff,
/// so a malformed role can never widen access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    /// Salon administrator: sees staff scheduling and the salon dashboard.
    Admin,
    /// Regular staff member.
    #[default]
    #[serde(other)]
    Staff,
}

impl StaffRole {
    /// Parse a role string from the identity provider.
    ///
    /// Never fails: anything other than the exact string `"admin"` maps to
    /// [`StaffRole::Staff`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "admin" { Self::Admin } else { Self::Staff }
    }

    /// Whether this role carries salon-admin capabilities.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Staff => write!(f, "staff"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_admin_literal_only() {
        assert_eq!(StaffRole::parse("admin"), StaffRole::Admin);
        // Anything else, including near-misses, is regular staff.
        assert_eq!(StaffRole::parse("Admin"), StaffRole::Staff);
        assert_eq!(StaffRole::parse("ADMIN"), StaffRole::Staff);
        assert_eq!(StaffRole::parse("administrator"), StaffRole::Staff);
        assert_eq!(StaffRole::parse("staff"), StaffRole::Staff);
        assert_eq!(StaffRole::parse("receptionist"), StaffRole::Staff);
        assert_eq!(StaffRole::parse(""), StaffRole::Staff);
    }

    #[test]
    fn test_is_admin() {
        assert!(StaffRole::Admin.is_admin());
        assert!(!StaffRole::Staff.is_admin());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(StaffRole::parse(&StaffRole::Admin.to_string()), StaffRole::Admin);
        assert_eq!(StaffRole::parse(&StaffRole::Staff.to_string()), StaffRole::Staff);
    }
}
