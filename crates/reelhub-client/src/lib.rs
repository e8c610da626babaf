//! # reelhub-client
//!
//! API gateway functions for the ReelHub movie server. Each public method
//! on [`ApiClient`] issues exactly one HTTP request with a fixed method,
//! URL, and body shape, and delivers its outcome exactly once as an
//! [`reelhub_core::AppResult`]. No retries, no timeouts, no caching.

pub mod auth;
pub mod client;
pub mod dto;
pub mod error;
pub mod movies;

pub use client::ApiClient;
