//! Outbound notification services.

pub mod notify;

pub use notify::NotifyClient;
