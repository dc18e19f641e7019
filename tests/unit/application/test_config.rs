use awqat_salah::config::{Config, Credentials, RestApiConfig};
use awqat_salah::constants::DEFAULT_BASE_URL;
use std::time::Duration;

#[test]
fn test_default_base_url() {
    let config = Config::with_base_url(DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.base_url, "https://awqatsalah.diyanet.gov.tr");
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_custom_base_url() {
    let config = Config::with_base_url("https://custom-url.com");
    assert_eq!(config.rest_api.base_url, "https://custom-url.com");
}

#[test]
fn test_credentials_password_not_serialized() {
    let creds = Credentials {
        email: "test@example.com".to_string(),
        password: "secret".to_string(),
    };

    let json = serde_json::to_string(&creds).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(!json.contains("secret"));

    let deserialized: Credentials = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized.email, "test@example.com");
    assert!(deserialized.password.is_empty());
}

#[test]
fn test_config_display_hides_password() {
    let config = Config::with_base_url(DEFAULT_BASE_URL).credentials("a@b.c", "hunter2");
    assert!(!config.to_string().contains("hunter2"));
    assert!(!format!("{config:?}").contains("hunter2"));
}

#[test]
fn test_refresh_margin() {
    let mut config = Config::with_base_url(DEFAULT_BASE_URL);
    assert_eq!(config.refresh_margin_ms(), 60_000);
    config.refresh_margin_secs = 5;
    assert_eq!(config.refresh_margin_ms(), 5_000);
}

#[test]
fn test_rest_api_config_clone() {
    let config = RestApiConfig {
        base_url: "https://api.example.com".to_string(),
        timeout: 10,
    };

    let cloned = config.clone();
    assert_eq!(config.base_url, cloned.base_url);
    assert_eq!(config.timeout, cloned.timeout);
}
