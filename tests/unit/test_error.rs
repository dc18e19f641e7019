use awqat_salah::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_api_with_message() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        message: Some("X".to_string()),
    };
    assert_eq!(error.to_string(), "api error: status 404 Not Found: X");
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(error.api_message(), Some("X"));
}

#[test]
fn test_app_error_display_api_without_message() {
    let error = AppError::Api {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: None,
    };
    assert!(error.to_string().contains("500"));
    assert_eq!(error.api_message(), None);
}

#[test]
fn test_app_error_display_unauthorized() {
    assert_eq!(AppError::Unauthorized.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_missing_data() {
    assert_eq!(AppError::MissingData.to_string(), "response carried no data");
}

#[test]
fn test_app_error_display_invalid_token() {
    let error = AppError::InvalidToken("bad segment".to_string());
    assert_eq!(error.to_string(), "invalid token: bad segment");
    assert_eq!(error.status(), None);
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(ref e) => assert!(app_error.source().is_some(), "{e}"),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_base64() {
    use base64::Engine;
    let decode_error = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode("!!!")
        .unwrap_err();
    let app_error: AppError = decode_error.into();
    assert!(matches!(app_error, AppError::InvalidToken(_)));
}
