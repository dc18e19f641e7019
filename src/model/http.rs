/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::envelope::Envelope;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Authenticated HTTP client for the Awqat Salah API
///
/// Every request carries `Authorization: Bearer <access token>` when a session
/// exists and the `{success, message, data}` envelope is unwrapped before the
/// payload is returned. Failures are logged once and returned as [`AppError`].
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new client. No request is made until `login` or a data call.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let http_client = build_http_client(&config);
        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Makes an authenticated GET request and returns the envelope payload
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes an authenticated POST request with a JSON body and returns the envelope payload
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes an authenticated request with the current access token
    ///
    /// The token is read once when the request is built. A request issued while a
    /// background refresh is in flight may still carry the previous token.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let session = self.auth.session().await;
        if session.as_ref().is_some_and(Session::is_expired) {
            warn!("Access token has expired, request may be rejected");
        }
        let url = self.url(path);
        make_http_request(
            &self.http_client,
            method,
            &url,
            session.as_ref().map(|s| s.access_token.as_str()),
            body,
        )
        .await
    }

    /// Builds the absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url,
                path.trim_start_matches('/')
            )
        }
    }

    /// Gets the current session, if logged in
    pub async fn get_session(&self) -> Option<Session> {
        self.auth.session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Builds the underlying `reqwest` client with the configured timeout
pub fn build_http_client(config: &Config) -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout())
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client, using defaults: {}", e);
            Client::new()
        })
}

/// Diagnostic emitted once for every failed API call
#[derive(Debug, Clone)]
pub struct RequestDiagnostic {
    /// Requested URL
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Response status, `None` when no response was received
    pub status: Option<StatusCode>,
    /// Transport or decoding error message
    pub transport_error: Option<String>,
    /// `success` flag of the envelope, false when absent
    pub api_success: bool,
    /// `message` field of the envelope
    pub api_message: Option<String>,
}

impl fmt::Display for RequestDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error during API call, url: {}, method: {}, status: {}, transport error: {}, api success: {}, api message: {}",
            self.url,
            self.method,
            self.status.map_or(0, |s| s.as_u16()),
            self.transport_error.as_deref().unwrap_or("none"),
            self.api_success,
            self.api_message.as_deref().unwrap_or("none"),
        )
    }
}

impl RequestDiagnostic {
    fn new(method: &Method, url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: method.clone(),
            status: None,
            transport_error: None,
            api_success: false,
            api_message: None,
        }
    }

    fn emit(self, err: AppError) -> AppError {
        error!("{}", self);
        err
    }
}

/// Sends a request and unwraps the response envelope
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `bearer` - Access token for the `Authorization` header, if any
/// * `body` - Optional request body (serialized to JSON)
///
/// # Returns
///
/// * `Ok(T)` - the envelope `data`, when the status is 2xx and `success` is true
/// * `Err(AppError::Network)` - no response was received
/// * `Err(AppError::Api)` - non-2xx status or `success: false`
/// * `Err(AppError::MissingData)` - success without `data`
/// * `Err(AppError::Json)` - `data` does not match `T`
///
/// Every error is logged exactly once as a [`RequestDiagnostic`].
pub async fn make_http_request<B: Serialize + ?Sized, T: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: &str,
    bearer: Option<&str>,
    body: Option<&B>,
) -> Result<T, AppError> {
    debug!("{} {}", method, url);
    let mut diag = RequestDiagnostic::new(&method, url);

    let mut request = client
        .request(method.clone(), url)
        .header(ACCEPT, "application/json");
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            diag.transport_error = Some(e.to_string());
            return Err(diag.emit(AppError::Network(e)));
        }
    };

    let status = response.status();
    diag.status = Some(status);
    debug!("Response status: {}", status);

    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            diag.transport_error = Some(e.to_string());
            return Err(diag.emit(AppError::Network(e)));
        }
    };

    let envelope: Envelope<Value> = match serde_json::from_str(&text) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => {
            diag.transport_error = Some(format!("invalid envelope: {e}"));
            return Err(diag.emit(AppError::Json(e)));
        }
        // error pages are often not JSON, the status is what matters
        Err(_) => Envelope::default(),
    };
    diag.api_success = envelope.success;
    diag.api_message = envelope.message.clone();

    if !status.is_success() || !envelope.success {
        return Err(diag.emit(AppError::Api {
            status,
            message: envelope.message,
        }));
    }

    let Some(data) = envelope.into_data() else {
        return Err(diag.emit(AppError::MissingData));
    };

    match serde_json::from_value(data) {
        Ok(value) => Ok(value),
        Err(e) => {
            diag.transport_error = Some(format!("invalid payload: {e}"));
            Err(diag.emit(AppError::Json(e)))
        }
    }
}
