use awqat_salah::error::AppError;
use awqat_salah::model::auth::{TokenPair, decode_claims, refresh_delay};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use std::time::Duration;

#[test]
fn test_token_pair_deserialization() {
    let pair: TokenPair =
        serde_json::from_str(r#"{"accessToken":"a.b.c","refreshToken":"r"}"#).unwrap();
    assert_eq!(pair.access_token, "a.b.c");
    assert_eq!(pair.refresh_token, "r");
}

#[test]
fn test_decode_claims_with_identity_claims() {
    let payload = serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "uuid",
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "test@test",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Developer",
        "exp": 1_893_456_000,
        "iss": "test.com",
        "aud": "test.com"
    });
    let token = format!(
        "{}.{}.sig",
        STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        STANDARD.encode(payload.to_string())
    );

    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.expires_at_ms(), 1_893_456_000_000);
    assert_eq!(claims.aud.as_deref(), Some("test.com"));
}

#[test]
fn test_decode_claims_two_segments() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#);
    let result = decode_claims(&format!("header.{payload}"));
    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_decode_claims_payload_not_json() {
    let payload = URL_SAFE_NO_PAD.encode("not json");
    let result = decode_claims(&format!("header.{payload}.sig"));
    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_refresh_delay_formula() {
    let now = 1_700_000_000_000;
    for (exp, expected) in [
        (now + 65_000, 5_000),
        (now + 3_600_000, 3_540_000),
        (now + 60_001, 1),
        (now + 59_999, 0),
        (now - 1, 0),
    ] {
        assert_eq!(
            refresh_delay(exp, now, 60_000),
            Duration::from_millis(expected),
            "exp offset {}",
            exp - now
        );
    }
}

#[test]
fn test_refresh_delay_zero_margin() {
    assert_eq!(refresh_delay(10_000, 4_000, 0), Duration::from_millis(6_000));
}
