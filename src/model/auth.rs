/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Token payloads and unverified JWT claim decoding
//!
//! The claims are read only to schedule the background refresh. Nothing here
//! verifies signatures and the decoded values must not be used for authorization.

use crate::error::AppError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Access/refresh token pair returned by the login and refresh endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short lived bearer token
    pub access_token: String,
    /// Longer lived token exchanged for a new pair
    pub refresh_token: String,
}

/// Subset of the access token claims used by the client
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// Expiry, seconds since epoch. Some issuers emit fractional seconds.
    pub exp: f64,
    /// Issuer
    #[serde(default)]
    pub iss: Option<String>,
    /// Audience
    #[serde(default)]
    pub aud: Option<String>,
}

impl TokenClaims {
    /// Expiry in milliseconds since epoch
    #[must_use]
    pub fn expires_at_ms(&self) -> i64 {
        (self.exp * 1000.0) as i64
    }
}

/// Decodes the payload segment of a `header.payload.signature` token
///
/// Accepts both the URL-safe and the standard base64 alphabet, padded or not.
///
/// # Errors
/// * `AppError::InvalidToken` - the token does not have three segments, or the payload
///   is not base64 encoded JSON with an `exp` claim
pub fn decode_claims(token: &str) -> Result<TokenClaims, AppError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            return Err(AppError::InvalidToken(
                "expected three dot separated segments".to_string(),
            ));
        }
    };

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidToken(e.to_string()))
}

/// Computes how long to wait before refreshing a token
///
/// `max(expires_at_ms - margin_ms - now_ms, 0)`
#[must_use]
pub fn refresh_delay(expires_at_ms: i64, now_ms: i64, margin_ms: u64) -> Duration {
    let margin = i64::try_from(margin_ms).unwrap_or(i64::MAX);
    let remaining = expires_at_ms.saturating_sub(margin).saturating_sub(now_ms);
    Duration::from_millis(u64::try_from(remaining).unwrap_or(0))
}
