//! Effective salon context resolution.
//!
//! Every dashboard request renders against an "effective salon": the staff
//! member's own salon, plus an impersonation flag when a platform operator
//! has selected another tenant to act as. The resolver is a cheap pure
//! derivation of the upstream authentication context, recomputed per
//! request; [`SalonContextCache`] keeps repeated resolutions of an
//! unchanged context value-equal without ever serving a changed input a
//! stale result (a changed input is a different cache key).

use moka::sync::Cache;
use std::time::Duration;

use fisherman_core::SalonId;

/// Upstream authentication context, as supplied by the identity provider.
///
/// All fields are permissive: an absent salon or name resolves to a context
/// with `None` fields rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AuthContext {
    /// The staff member's own salon.
    pub current_salon_id: Option<SalonId>,
    /// Display name of that salon.
    pub current_salon_name: Option<String>,
    /// Whether this user is a platform operator.
    pub is_platform_admin: bool,
    /// Salon a platform operator has selected to act as, if any.
    pub selected_salon_id: Option<SalonId>,
}

/// Read-only effective salon view derived from an [`AuthContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalonContext {
    /// The staff member's own salon (passthrough).
    pub salon_id: Option<SalonId>,
    /// Display name of that salon (passthrough).
    pub salon_name: Option<String>,
    /// Whether this user is a platform operator (passthrough).
    pub is_platform_admin: bool,
    /// Selected salon during impersonation (passthrough).
    pub selected_salon_id: Option<SalonId>,
    /// True exactly when a platform operator has a salon selected.
    pub is_impersonating: bool,
}

impl SalonContext {
    /// Derive the effective salon view from the authentication context.
    ///
    /// Never fails; a default (absent) context yields a default view with
    /// `is_impersonating == false`.
    #[must_use]
    pub fn resolve(auth: &AuthContext) -> Self {
        Self {
            salon_id: auth.current_salon_id.clone(),
            salon_name: auth.current_salon_name.clone(),
            is_platform_admin: auth.is_platform_admin,
            selected_salon_id: auth.selected_salon_id.clone(),
            is_impersonating: auth.is_platform_admin && auth.selected_salon_id.is_some(),
        }
    }
}

/// Capacity of the salon-context cache. One entry per distinct auth
/// context; a few hundred covers every active staff session.
const CACHE_CAPACITY: u64 = 1024;

/// How long a resolved context may sit in the cache. Resolution is cheap,
/// so a short lifetime just bounds memory - nothing is cached permanently.
const CACHE_TTL: Duration = Duration::from_secs(60);

/// Value-equality cache over [`SalonContext::resolve`].
///
/// Keyed by the whole [`AuthContext`], so equal inputs share one resolved
/// value and any change to an input misses to a fresh entry.
#[derive(Clone)]
pub struct SalonContextCache {
    cache: Cache<AuthContext, SalonContext>,
}

impl SalonContextCache {
    /// Create a bounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }

    /// Resolve the effective salon view, reusing the cached value for an
    /// unchanged authentication context.
    #[must_use]
    pub fn resolve(&self, auth: &AuthContext) -> SalonContext {
        self.cache
            .get_with_by_ref(auth, || SalonContext::resolve(auth))
    }
}

impl Default for SalonContextCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(is_platform_admin: bool, selected: Option<&str>) -> AuthContext {
        AuthContext {
            current_salon_id: Some(SalonId::new("S1")),
            current_salon_name: Some("Shear Bliss".to_owned()),
            is_platform_admin,
            selected_salon_id: selected.map(SalonId::new),
        }
    }

    #[test]
    fn test_impersonating_when_platform_admin_with_selection() {
        let ctx = SalonContext::resolve(&auth(true, Some("S2")));
        assert!(ctx.is_impersonating);
        assert_eq!(ctx.selected_salon_id, Some(SalonId::new("S2")));
    }

    #[test]
    fn test_not_impersonating_without_selection() {
        let ctx = SalonContext::resolve(&auth(true, None));
        assert!(!ctx.is_impersonating);
    }

    #[test]
    fn test_admin_flag_dominates_selection() {
        // A selection without the platform-admin flag must not count.
        let ctx = SalonContext::resolve(&auth(false, Some("S2")));
        assert!(!ctx.is_impersonating);
        assert!(!ctx.is_platform_admin);
    }

    #[test]
    fn test_passthrough_fields() {
        let ctx = SalonContext::resolve(&auth(true, Some("S2")));
        assert_eq!(ctx.salon_id, Some(SalonId::new("S1")));
        assert_eq!(ctx.salon_name.as_deref(), Some("Shear Bliss"));
        assert!(ctx.is_platform_admin);
    }

    #[test]
    fn test_absent_context_resolves_to_defaults() {
        let ctx = SalonContext::resolve(&AuthContext::default());
        assert_eq!(ctx, SalonContext::default());
        assert!(!ctx.is_impersonating);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let input = auth(true, Some("S2"));
        assert_eq!(SalonContext::resolve(&input), SalonContext::resolve(&input));
    }

    #[test]
    fn test_cache_returns_value_equal_results() {
        let cache = SalonContextCache::new();
        let input = auth(true, Some("S2"));
        assert_eq!(cache.resolve(&input), cache.resolve(&input));
        assert_eq!(cache.resolve(&input), SalonContext::resolve(&input));
    }

    #[test]
    fn test_cache_reflects_changed_inputs_immediately() {
        let cache = SalonContextCache::new();
        assert!(cache.resolve(&auth(true, Some("S2"))).is_impersonating);
        // Clearing the selection is a different key - no stale read.
        assert!(!cache.resolve(&auth(true, None)).is_impersonating);
    }
}
