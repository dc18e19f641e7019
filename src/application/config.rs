/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REST_TIMEOUT, REFRESH_MARGIN_MS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Login credentials for the Awqat Salah API
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    #[serde(default, skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Awqat Salah client
pub struct Config {
    /// Credentials, used by `Client::login_with_config`
    pub credentials: Option<Credentials>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// How long before token expiry the background refresh fires, in seconds
    pub refresh_margin_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `AWQAT_EMAIL` / `AWQAT_PASSWORD` | none |
    /// | `AWQAT_BASE_URL` | `https://awqatsalah.diyanet.gov.tr` |
    /// | `AWQAT_REST_TIMEOUT` | `30` |
    /// | `AWQAT_REFRESH_MARGIN_SECS` | `60` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let email: Option<String> = get_env_or_none("AWQAT_EMAIL");
        let password: Option<String> = get_env_or_none("AWQAT_PASSWORD");
        let credentials = match (email, password) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            _ => {
                debug!("AWQAT_EMAIL/AWQAT_PASSWORD not set, login must be called explicitly");
                None
            }
        };

        Config {
            credentials,
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&get_env_or_default(
                    "AWQAT_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                )),
                timeout: get_env_or_default("AWQAT_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            refresh_margin_secs: get_env_or_default(
                "AWQAT_REFRESH_MARGIN_SECS",
                REFRESH_MARGIN_MS / 1000,
            ),
        }
    }

    /// Creates a configuration pointing at a custom base URL, without credentials
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            credentials: None,
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url),
                timeout: DEFAULT_REST_TIMEOUT,
            },
            refresh_margin_secs: REFRESH_MARGIN_MS / 1000,
        }
    }

    /// Sets the credentials used by `Client::login_with_config`
    #[must_use]
    pub fn credentials(mut self, email: &str, password: &str) -> Self {
        self.credentials = Some(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        });
        self
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }

    /// Refresh margin in milliseconds
    #[must_use]
    pub fn refresh_margin_ms(&self) -> u64 {
        self.refresh_margin_secs.saturating_mul(1000)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
