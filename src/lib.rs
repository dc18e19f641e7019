/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Awqat Salah Client
//!
//! Typed client for the Awqat Salah prayer times REST API.
//!
//! The client keeps a short lived access token and a longer lived refresh token,
//! attaches the access token to every request and re-authenticates in the
//! background one minute before the access token expires.
//!
//! ## Usage
//!
//! ```ignore
//! use awqat_salah::prelude::*;
//!
//! let client = Client::default();
//! client.login("user@example.com", "secret").await;
//!
//! if let Some(countries) = client.countries().await {
//!     info!("Got {} countries", countries.len());
//! }
//! client.close();
//! ```

/// Application layer: configuration, session management and the public client
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models: envelope, auth payloads, request bodies and the HTTP helper
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records returned by the API
pub mod presentation;
/// Utilities
pub mod utils;

/// Re-export of the configuration module at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
