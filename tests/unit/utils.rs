use awqat_salah::utils::config::{get_env_or_default, get_env_or_none};

// each test uses its own variable, tests run in parallel
#[test]
fn test_get_env_or_default_unset() {
    let value: u64 = get_env_or_default("AWQAT_TEST_UNSET_VARIABLE", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_default_parses() {
    unsafe { std::env::set_var("AWQAT_TEST_TIMEOUT_PARSE", "15") };
    let value: u64 = get_env_or_default("AWQAT_TEST_TIMEOUT_PARSE", 30);
    assert_eq!(value, 15);
}

#[test]
fn test_get_env_or_default_invalid_falls_back() {
    unsafe { std::env::set_var("AWQAT_TEST_TIMEOUT_INVALID", "fifteen") };
    let value: u64 = get_env_or_default("AWQAT_TEST_TIMEOUT_INVALID", 30);
    assert_eq!(value, 30);
}

#[test]
fn test_get_env_or_none_blank_is_unset() {
    unsafe { std::env::set_var("AWQAT_TEST_BLANK", "   ") };
    let value: Option<String> = get_env_or_none("AWQAT_TEST_BLANK");
    assert_eq!(value, None);
}

#[test]
fn test_get_env_or_none_trims() {
    unsafe { std::env::set_var("AWQAT_TEST_EMAIL_TRIM", " user@example.com ") };
    let value: Option<String> = get_env_or_none("AWQAT_TEST_EMAIL_TRIM");
    assert_eq!(value.as_deref(), Some("user@example.com"));
}
