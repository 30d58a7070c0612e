//! Validation tests.

use super::codes::ErrorCode;
use super::validate_config;
use crate::config::ConfigInput;

const KEY: &str = "sk_live_abcdef1234";

#[test]
fn test_valid_minimal_input() {
    let result = validate_config(&ConfigInput::new(KEY));
    assert!(result.is_valid());
    assert!(result.errors.is_empty());
}

#[test]
fn test_valid_full_input() {
    let input = ConfigInput::new(KEY)
        .with_base_url("https://api.staging.scell.io/api")
        .with_environment("staging")
        .with_sandbox(true);
    assert!(validate_config(&input).is_valid());
}

#[test]
fn test_missing_api_key() {
    let result = validate_config(&ConfigInput::default());
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::MissingApiKey);
    assert_eq!(result.errors[0].field, "apiKey");
    assert!(result.errors[0].message.contains("API key"));
}

#[test]
fn test_empty_api_key_counts_as_missing() {
    let result = validate_config(&ConfigInput::new(""));
    assert!(result.has(ErrorCode::MissingApiKey));
    assert!(!result.has(ErrorCode::ApiKeyTooShort));
}

#[test]
fn test_short_api_key_is_the_only_error() {
    let result = validate_config(&ConfigInput::new("short"));
    assert!(!result.is_valid());
    assert_eq!(result.messages(), vec!["API key appears to be too short"]);
    assert_eq!(result.errors[0].code, ErrorCode::ApiKeyTooShort);
}

#[test]
fn test_api_key_length_boundary() {
    // 9 characters fails, 10 passes.
    assert!(!validate_config(&ConfigInput::new("a".repeat(9))).is_valid());
    assert!(validate_config(&ConfigInput::new("a".repeat(10))).is_valid());
    assert!(validate_config(&ConfigInput::new("a".repeat(64))).is_valid());
}

#[test]
fn test_api_key_length_counts_characters() {
    let accented = "é".repeat(10);
    assert!(validate_config(&ConfigInput::new(accented)).is_valid());

    let emoji = "🔑".repeat(9);
    assert!(validate_config(&ConfigInput::new(emoji)).has(ErrorCode::ApiKeyTooShort));
}

#[test]
fn test_base_url_scheme() {
    for url in ["http://localhost:8000/api", "https://api.scell.io/api"] {
        assert!(validate_config(&ConfigInput::new(KEY).with_base_url(url)).is_valid());
    }

    for url in ["api.scell.io", "ftp://api.scell.io", "", "HTTPS://api.scell.io", " https://x"] {
        let result = validate_config(&ConfigInput::new(KEY).with_base_url(url));
        assert!(!result.is_valid(), "{url:?} should be rejected");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidBaseUrl);
        assert_eq!(
            result.errors[0].message,
            "Base URL must start with http:// or https://"
        );
    }
}

#[test]
fn test_invalid_environment() {
    let result = validate_config(&ConfigInput::new(KEY).with_environment("prod"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::InvalidEnvironment);
    assert_eq!(
        result.errors[0].message,
        "Environment must be one of: production, staging, development"
    );
}

#[test]
fn test_errors_accumulate_in_check_order() {
    let input = ConfigInput::default()
        .with_base_url("api.scell.io")
        .with_environment("qa");
    let result = validate_config(&input);
    let codes: Vec<ErrorCode> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::MissingApiKey,
            ErrorCode::InvalidBaseUrl,
            ErrorCode::InvalidEnvironment
        ]
    );
}

#[test]
fn test_result_serializes_codes() {
    let result = validate_config(&ConfigInput::new("short"));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["errors"][0]["code"], "E002");
    assert_eq!(json["errors"][0]["field"], "apiKey");
}
