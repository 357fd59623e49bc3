//! Fisherman Booking library.
//!
//! This crate provides the public booking site as a library, allowing it to
//! be tested and reused.
//!
//! # Security
//!
//! This binary is public-facing. It holds only Mailjet send credentials,
//! serves read-only salon profiles from disk, and stores nothing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
