//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Salon tenant keys
//! are opaque strings issued by the upstream directory, so [`SalonId`] and
//! [`SalonSlug`] are string-backed rather than numeric.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use fisherman_core::define_id;
/// define_id!(StaffId);
/// define_id!(ClientId);
///
/// let staff_id = StaffId::new(1);
/// let client_id = ClientId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: StaffId = client_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(StaffId);
define_id!(ClientId);
define_id!(ProviderId);
define_id!(ServiceId);
define_id!(AppointmentId);

/// Opaque salon tenant identifier.
///
/// Salon IDs are issued by the upstream directory and treated as opaque
/// strings (e.g. `"S2"`). They are only ever compared and displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalonId(String);

impl SalonId {
    /// Create a new salon ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the salon ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SalonId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SalonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SalonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SalonId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// URL-safe slug identifying a salon's public booking page.
///
/// Distinct from [`SalonId`]: the slug is chosen by the salon and appears in
/// public URLs, while the ID is internal and stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalonSlug(String);

impl SalonSlug {
    /// Create a new slug from any string-like value.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SalonSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SalonSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_roundtrip() {
        let id = StaffId::new(42);
        assert_eq!(id.as_i32(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(StaffId::from(42), id);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn test_salon_id_is_opaque() {
        let id = SalonId::new("S2");
        assert_eq!(id.as_str(), "S2");
        assert_eq!(format!("{id}"), "S2");
        assert_eq!(SalonId::from("S2"), id);
    }

    #[test]
    fn test_salon_id_serde_transparent() {
        let id = SalonId::new("S2");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"S2\"");
        let back: SalonId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
