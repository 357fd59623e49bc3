//! Role-aware settings navigation.
//!
//! The settings menu is recomputed per request from the staff member's role
//! and email. Every staff member sees the eight base entries; salon admins
//! additionally get staff scheduling and the salon dashboard; platform
//! operators (matched against the injected email allow-list) get the
//! cross-tenant Platform Admin entry last.

use serde::Serialize;

use fisherman_core::{Email, StaffRole};

/// A single entry in the settings menu, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub name: String,
    /// Target path.
    pub href: String,
}

impl NavItem {
    fn new(name: &str, href: &str) -> Self {
        Self {
            name: name.to_owned(),
            href: href.to_owned(),
        }
    }
}

/// Emails authorized for the cross-tenant Platform Admin area.
///
/// Injected from configuration (`PLATFORM_ADMIN_EMAILS`) rather than
/// hard-coded, so tests and future deployments can supply their own list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformAdminList {
    emails: Vec<Email>,
}

impl PlatformAdminList {
    /// Build an allow-list from a set of authorized emails.
    #[must_use]
    pub fn new(emails: Vec<Email>) -> Self {
        Self { emails }
    }

    /// Whether the given email is authorized for platform administration.
    #[must_use]
    pub fn contains(&self, email: &Email) -> bool {
        self.emails.contains(email)
    }

    /// The authorized emails, in configuration order.
    #[must_use]
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }
}

/// Compute the ordered settings menu for a staff member.
///
/// Pure and deterministic: the same `(role, email, platform_admins)` always
/// yields the same sequence, and nothing is mutated.
///
/// Order is significant:
/// 1. the eight base entries, for everyone;
/// 2. Staff Schedule then Dashboard, for salon admins;
/// 3. Platform Admin last, for allow-listed emails regardless of role.
#[must_use]
pub fn settings_navigation(
    role: StaffRole,
    email: Option<&Email>,
    platform_admins: &PlatformAdminList,
) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::new("Providers", "/settings/providers"),
        NavItem::new("Services", "/settings/services"),
        NavItem::new("Clients", "/settings/clients"),
        NavItem::new("Notifications", "/settings/notifications"),
        NavItem::new("Profile", "/settings/profile"),
        NavItem::new("Links", "/settings/links"),
        NavItem::new("Team Management", "/settings/team"),
        NavItem::new("Billing", "/settings/billing"),
    ];

    if role.is_admin() {
        items.push(NavItem::new("Staff Schedule", "/settings/schedule"));
        items.push(NavItem::new("Dashboard", "/dashboard"));
    }

    if email.is_some_and(|email| platform_admins.contains(email)) {
        items.push(NavItem::new("Platform Admin", "/platform"));
    }

    items
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BASE_NAMES: [&str; 8] = [
        "Providers",
        "Services",
        "Clients",
        "Notifications",
        "Profile",
        "Links",
        "Team Management",
        "Billing",
    ];

    fn allowlist() -> PlatformAdminList {
        PlatformAdminList::new(vec![
            Email::parse("ameet@gofisherman.com").unwrap(),
            Email::parse("support@gofisherman.com").unwrap(),
        ])
    }

    fn names(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_staff_without_email_gets_base_sequence_only() {
        let items = settings_navigation(StaffRole::parse("staff"), None, &allowlist());
        assert_eq!(names(&items), BASE_NAMES);
    }

    #[test]
    fn test_non_admin_roles_never_see_admin_entries() {
        for role in ["staff", "receptionist", "Admin", "ADMIN", ""] {
            let items = settings_navigation(StaffRole::parse(role), None, &allowlist());
            assert!(
                !items.iter().any(|i| i.name == "Staff Schedule" || i.name == "Dashboard"),
                "role {role:?} must not see admin entries"
            );
        }
    }

    #[test]
    fn test_admin_gets_schedule_then_dashboard_after_base() {
        let items = settings_navigation(StaffRole::parse("admin"), None, &allowlist());
        assert_eq!(items.len(), 10);
        assert_eq!(items[8].name, "Staff Schedule");
        assert_eq!(items[9].name, "Dashboard");
    }

    #[test]
    fn test_allowlisted_admin_gets_exact_eleven_item_sequence() {
        let email = Email::parse("ameet@gofisherman.com").unwrap();
        let items = settings_navigation(StaffRole::parse("admin"), Some(&email), &allowlist());
        assert_eq!(
            names(&items),
            vec![
                "Providers",
                "Services",
                "Clients",
                "Notifications",
                "Profile",
                "Links",
                "Team Management",
                "Billing",
                "Staff Schedule",
                "Dashboard",
                "Platform Admin",
            ]
        );
    }

    #[test]
    fn test_allowlisted_email_gets_platform_admin_regardless_of_role() {
        let email = Email::parse("support@gofisherman.com").unwrap();
        let items = settings_navigation(StaffRole::parse("staff"), Some(&email), &allowlist());
        assert_eq!(items.len(), 9);
        assert_eq!(items.last().unwrap().name, "Platform Admin");
        assert_eq!(items.last().unwrap().href, "/platform");
    }

    #[test]
    fn test_platform_admin_is_always_last() {
        let email = Email::parse("ameet@gofisherman.com").unwrap();
        let items = settings_navigation(StaffRole::parse("admin"), Some(&email), &allowlist());
        assert_eq!(items.last().unwrap().name, "Platform Admin");
    }

    #[test]
    fn test_non_allowlisted_email_gets_no_platform_admin() {
        let email = Email::parse("someone@salon.example").unwrap();
        let items = settings_navigation(StaffRole::parse("admin"), Some(&email), &allowlist());
        assert!(!items.iter().any(|i| i.name == "Platform Admin"));
    }

    #[test]
    fn test_empty_allowlist_never_appends() {
        let email = Email::parse("ameet@gofisherman.com").unwrap();
        let items =
            settings_navigation(StaffRole::parse("admin"), Some(&email), &PlatformAdminList::default());
        assert!(!items.iter().any(|i| i.name == "Platform Admin"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let email = Email::parse("ameet@gofisherman.com").unwrap();
        let list = allowlist();
        let first = settings_navigation(StaffRole::Admin, Some(&email), &list);
        let second = settings_navigation(StaffRole::Admin, Some(&email), &list);
        assert_eq!(first, second);
    }
}
