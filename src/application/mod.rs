/// Session management and background token refresh
pub mod auth;
/// Public client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
