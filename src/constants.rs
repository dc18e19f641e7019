/// Default base URL of the Awqat Salah API
pub const DEFAULT_BASE_URL: &str = "https://awqatsalah.diyanet.gov.tr";
/// Path prefix of the authentication endpoints
pub const AUTH_BASE: &str = "/Auth";
/// Path prefix of the data endpoints
pub const API_BASE: &str = "/api";
/// Path prefix of the place endpoints
pub const PLACE_ENDPOINT: &str = "/api/Place";
/// Path prefix of the prayer time endpoints
pub const PRAYER_TIME_ENDPOINT: &str = "/api/PrayerTime";
/// How long before access token expiry the refresh fires (1 minute)
pub const REFRESH_MARGIN_MS: u64 = 60 * 1000;
/// Default REST timeout in seconds
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Awqat Salah API
pub const USER_AGENT: &str = "awqat-salah-client/0.1.0";
