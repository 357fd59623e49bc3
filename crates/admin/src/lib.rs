//! Fisherman Admin library.
//!
//! This crate provides the staff dashboard functionality as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This binary is deployed behind the identity-aware proxy: staff identity
//! arrives as trusted request headers, and the proxy strips any
//! client-supplied values for those headers. It holds live Stripe and
//! Mailjet credentials - never expose it on the public network.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
