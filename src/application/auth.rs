/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Session management for the Awqat Salah API
//!
//! This module handles:
//! - Login with email and password
//! - Background refresh of the token pair one minute before the access token expires
//! - Stopping the background refresh when the client is closed or dropped
//!
//! Session states: unauthenticated until the first successful login, authenticated
//! afterwards. A failed refresh keeps the stale pair in place and stops the refresh
//! loop; it never returns the session to the unauthenticated state.

use crate::application::config::Config;
use crate::constants::AUTH_BASE;
use crate::error::AppError;
use crate::model::auth::{TokenPair, decode_claims, refresh_delay};
use crate::model::http::make_http_request;
use crate::model::requests::LoginRequest;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Current token pair
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Bearer token attached to every request
    pub access_token: String,
    /// Token exchanged for a new pair
    pub refresh_token: String,
    /// Expiry of the access token, `None` when its `exp` claim could not be read
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session from a token pair, reading the expiry from the access token
    pub fn new(pair: TokenPair) -> Self {
        let expires_at = match decode_claims(&pair.access_token) {
            Ok(claims) => DateTime::from_timestamp_millis(claims.expires_at_ms()),
            Err(e) => {
                warn!("Could not read access token expiry: {}", e);
                None
            }
        };

        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_at,
        }
    }

    /// Time left before the refresh must fire, given a safety margin
    ///
    /// `None` when the expiry is unknown.
    #[must_use]
    pub fn refresh_in(&self, margin_ms: u64) -> Option<Duration> {
        self.expires_at.map(|exp| {
            refresh_delay(
                exp.timestamp_millis(),
                Utc::now().timestamp_millis(),
                margin_ms,
            )
        })
    }

    /// Checks if the access token is past its expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// State shared between [`Auth`] and its background refresh task
#[derive(Clone)]
struct SessionStore {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    async fn current(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn store(&self, pair: TokenPair) -> Session {
        let session = Session::new(pair);
        *self.session.write().await = Some(session.clone());
        session
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let url = format!("{}{}/Login", self.config.rest_api.base_url, AUTH_BASE);
        debug!("Sending login request to: {}", url);

        let body = LoginRequest { email, password };
        let pair: TokenPair =
            make_http_request(&self.client, Method::POST, &url, None, Some(&body)).await?;

        Ok(self.store(pair).await)
    }

    async fn refresh(&self) -> Result<Session, AppError> {
        let Some(current) = self.current().await else {
            return Err(AppError::Unauthorized);
        };

        let url = format!(
            "{}{}/RefreshToken/{}",
            self.config.rest_api.base_url, AUTH_BASE, current.refresh_token
        );
        let pair: TokenPair = make_http_request(
            &self.client,
            Method::GET,
            &url,
            Some(&current.access_token),
            None::<&()>,
        )
        .await?;

        Ok(self.store(pair).await)
    }
}

/// Refresh loop: sleep until the margin before expiry, refresh, repeat
///
/// Ends when the expiry of the current token is unknown or a refresh fails.
async fn refresh_loop(store: SessionStore, mut session: Session) {
    let margin_ms = store.config.refresh_margin_ms();
    loop {
        let Some(delay) = session.refresh_in(margin_ms) else {
            warn!("Access token has no readable expiry, automatic refresh disabled");
            return;
        };
        info!("Access token will be refreshed in {} millis", delay.as_millis());
        tokio::time::sleep(delay).await;

        info!("Refreshing access token");
        match store.refresh().await {
            Ok(new_session) => session = new_session,
            Err(e) => {
                error!("Failed to refresh access token: {}", e);
                return;
            }
        }
    }
}

/// Session manager for the Awqat Salah API
///
/// Owns the token pair and the background refresh task. At most one refresh task
/// runs per instance; logging in again replaces it.
pub struct Auth {
    store: SessionStore,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl Auth {
    /// Creates a new, unauthenticated Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration with the base URL and refresh margin
    /// * `client` - HTTP client used for the auth endpoints
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            store: SessionStore {
                config,
                client,
                session: Arc::new(RwLock::new(None)),
            },
            refresh_task: Mutex::new(None),
        }
    }

    /// Logs in and starts the background refresh
    ///
    /// On failure the current session, if any, is left untouched.
    ///
    /// # Returns
    /// * `Ok(Session)` - the stored session
    /// * `Err(AppError)` - transport failure or unsuccessful envelope
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        info!("Logging in as {}", email);
        let session = self.store.login(email, password).await?;
        self.arm_refresh(session.clone());
        info!("✓ Login successful");
        Ok(session)
    }

    /// Exchanges the refresh token for a new pair immediately and re-arms the refresh
    ///
    /// # Returns
    /// * `Ok(Session)` - the new session
    /// * `Err(AppError::Unauthorized)` - not logged in
    /// * `Err(AppError)` - the refresh call failed; the stale pair stays in place
    pub async fn refresh(&self) -> Result<Session, AppError> {
        info!("Refreshing access token");
        let session = self.store.refresh().await?;
        self.arm_refresh(session.clone());
        Ok(session)
    }

    /// Gets a snapshot of the current session
    pub async fn session(&self) -> Option<Session> {
        self.store.current().await
    }

    /// Checks if a login has succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.store.session.read().await.is_some()
    }

    /// Checks if the background refresh is scheduled
    pub fn is_refresh_scheduled(&self) -> bool {
        match self.refresh_task.lock() {
            Ok(task) => task.as_ref().is_some_and(|t| !t.is_finished()),
            Err(_) => false,
        }
    }

    /// Stops the background refresh. The current tokens are kept.
    pub fn close(&self) {
        if let Some(task) = self.take_task() {
            debug!("Stopping access token refresh");
            task.abort();
        }
    }

    /// Stops the background refresh and forgets the session
    pub async fn logout(&self) {
        info!("Logging out");
        self.close();
        *self.store.session.write().await = None;
    }

    fn arm_refresh(&self, session: Session) {
        let task = tokio::spawn(refresh_loop(self.store.clone(), session));
        match self.refresh_task.lock() {
            Ok(mut slot) => {
                if let Some(previous) = slot.replace(task) {
                    previous.abort();
                }
            }
            Err(_) => {
                error!("Refresh task lock poisoned, automatic refresh disabled");
                task.abort();
            }
        }
    }

    fn take_task(&self) -> Option<JoinHandle<()>> {
        match self.refresh_task.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl Drop for Auth {
    fn drop(&mut self) {
        self.close();
    }
}
