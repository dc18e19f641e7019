/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// Wrapper returned by every Awqat Salah endpoint
///
/// `data` is only trusted when `success` is true and the HTTP status was 2xx.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Whether the server processed the request
    #[serde(default)]
    pub success: bool,
    /// Server supplied message, usually set on failure
    #[serde(default)]
    pub message: Option<String>,
    /// Payload
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Returns the payload when the envelope reports success and carries data
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            success: false,
            message: None,
            data: None,
        }
    }
}
