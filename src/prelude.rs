/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Awqat Salah Client Prelude
//!
//! Convenient import of the most commonly used types and traits.
//!
//! ## Usage
//!
//! ```rust
//! use awqat_salah::prelude::*;
//!
//! let config = Config::with_base_url("https://awqatsalah.diyanet.gov.tr");
//! let client = Client::new(config);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Public client
pub use crate::application::client::Client;

/// Session manager and session snapshot
pub use crate::application::auth::{Auth, Session};

/// Service interfaces
pub use crate::application::interfaces::{ContentService, PlaceService, PrayerTimeService};

/// Authenticated HTTP client returning structured errors
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Domain records
pub use crate::presentation::{CityDetail, DailyContent, EidPrayerTime, Place, PrayerTime};

/// Wire models
pub use crate::model::auth::{TokenClaims, TokenPair, decode_claims};
pub use crate::model::envelope::Envelope;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, TimeZone, Utc};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
