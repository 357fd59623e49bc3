//! Fisherman Core - Shared types library.
//!
//! This crate provides common types used across all Fisherman components:
//! - `booking` - Public booking site
//! - `admin` - Internal staff dashboard (behind the identity proxy)
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and staff roles
//! - [`urls`] - Environment-aware public booking URL construction

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod urls;

pub use types::*;
pub use urls::{BookingUrls, Environment};
