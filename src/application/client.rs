/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the Awqat Salah API
//!
//! # Example
//! ```ignore
//! use awqat_salah::prelude::*;
//!
//! let client = Client::default();
//! client.login("user@example.com", "secret").await;
//!
//! let cities = client.cities_by_state(539).await.unwrap_or_default();
//! for city in cities {
//!     if let Some(times) = client.daily_prayer_time(city.id).await {
//!         info!("{}: {:?}", city.name, times);
//!     }
//! }
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::application::interfaces::{ContentService, PlaceService, PrayerTimeService};
use crate::constants::{API_BASE, PLACE_ENDPOINT, PRAYER_TIME_ENDPOINT};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::DateRangeRequest;
use crate::presentation::content::DailyContent;
use crate::presentation::place::{CityDetail, Place};
use crate::presentation::prayer_time::{EidPrayerTime, PrayerTime};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the Awqat Salah API
///
/// Data calls return `None` on any failure. Use [`Client::http`] for calls that
/// return the underlying [`AppError`] instead.
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client. No request is made until `login` or a data call.
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(config)),
        }
    }

    /// Creates a new client for a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Config::with_base_url(base_url))
    }

    /// Logs in and starts the background token refresh
    ///
    /// Failures are logged and otherwise ignored; check [`Client::is_authenticated`].
    pub async fn login(&self, email: &str, password: &str) {
        if let Err(e) = self.http_client.auth().login(email, password).await {
            debug!("Login failed: {}", e);
        }
    }

    /// Logs in with the credentials from the configuration
    pub async fn login_with_config(&self) {
        let Some(credentials) = self.http_client.config().credentials.clone() else {
            warn!("No credentials configured, set AWQAT_EMAIL and AWQAT_PASSWORD");
            return;
        };
        self.login(&credentials.email, &credentials.password).await;
    }

    /// Checks if a login has succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.http_client.auth().is_authenticated().await
    }

    /// Gets the current session
    pub async fn get_session(&self) -> Option<Session> {
        self.http_client.get_session().await
    }

    /// Stops the background token refresh
    pub fn close(&self) {
        self.http_client.auth().close();
    }

    /// Gets the underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        into_option(self.http_client.get(path).await)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Drops the error; it has already been logged by the HTTP layer
fn into_option<T>(result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Returning no value: {}", e);
            None
        }
    }
}

#[async_trait]
impl ContentService for Client {
    async fn daily_content(&self) -> Option<DailyContent> {
        self.get(&format!("{API_BASE}/DailyContent")).await
    }
}

#[async_trait]
impl PlaceService for Client {
    async fn countries(&self) -> Option<Vec<Place>> {
        self.get(&format!("{PLACE_ENDPOINT}/Countries")).await
    }

    async fn states(&self) -> Option<Vec<Place>> {
        self.get(&format!("{PLACE_ENDPOINT}/States")).await
    }

    async fn states_by_country(&self, country_id: u32) -> Option<Vec<Place>> {
        self.get(&format!("{PLACE_ENDPOINT}/States/{country_id}"))
            .await
    }

    async fn cities(&self) -> Option<Vec<Place>> {
        self.get(&format!("{PLACE_ENDPOINT}/Cities")).await
    }

    async fn cities_by_state(&self, state_id: u32) -> Option<Vec<Place>> {
        self.get(&format!("{PLACE_ENDPOINT}/Cities/{state_id}")).await
    }

    async fn city_detail(&self, city_id: u32) -> Option<CityDetail> {
        self.get(&format!("{PLACE_ENDPOINT}/CityDetail/{city_id}"))
            .await
    }
}

#[async_trait]
impl PrayerTimeService for Client {
    async fn daily_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>> {
        self.get(&format!("{PRAYER_TIME_ENDPOINT}/Daily/{city_id}"))
            .await
    }

    async fn weekly_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>> {
        self.get(&format!("{PRAYER_TIME_ENDPOINT}/Weekly/{city_id}"))
            .await
    }

    async fn monthly_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>> {
        self.get(&format!("{PRAYER_TIME_ENDPOINT}/Monthly/{city_id}"))
            .await
    }

    async fn eid_prayer_time(&self, city_id: u32) -> Option<EidPrayerTime> {
        self.get(&format!("{PRAYER_TIME_ENDPOINT}/Eid/{city_id}"))
            .await
    }

    async fn ramadan_prayer_time(&self, city_id: u32) -> Option<Vec<PrayerTime>> {
        self.get(&format!("{PRAYER_TIME_ENDPOINT}/Ramadan/{city_id}"))
            .await
    }

    async fn date_range(
        &self,
        city_id: u32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<Vec<PrayerTime>> {
        let body = DateRangeRequest::new(city_id, start, end);
        into_option(
            self.http_client
                .post(&format!("{PRAYER_TIME_ENDPOINT}/DateRange/"), &body)
                .await,
        )
    }
}
