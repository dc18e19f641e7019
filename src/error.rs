/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Public domain calls on [`crate::application::client::Client`] log these errors and
/// return `None`; the lower level [`crate::model::http::HttpClient`] hands them to the caller.
#[derive(Debug)]
pub enum AppError {
    /// Transport failure, no response was received
    Network(reqwest::Error),
    /// Payload could not be encoded or decoded as JSON
    Json(serde_json::Error),
    /// The server answered but the request did not succeed
    ///
    /// Covers non-2xx statuses as well as `success: false` envelopes.
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Server reported message, if any
        message: Option<String>,
    },
    /// The envelope reported success but carried no `data`
    MissingData,
    /// An operation needed an access token but the client is not logged in
    Unauthorized,
    /// The access token could not be decoded
    InvalidToken(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Api { status, message } => match message {
                Some(m) => write!(f, "api error: status {status}: {m}"),
                None => write!(f, "api error: status {status}"),
            },
            AppError::MissingData => write!(f, "response carried no data"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::InvalidToken(m) => write!(f, "invalid token: {m}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    /// HTTP status associated with this error, if the server answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Server reported message associated with this error, if any
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            AppError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(e: base64::DecodeError) -> Self {
        AppError::InvalidToken(e.to_string())
    }
}
