//! Individual field checks.

use crate::config::Environment;
use crate::constants::{API_KEY_ENV, MIN_API_KEY_LEN};

use super::codes::ErrorCode;
use super::result::ValidationIssue;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// API key must be present and at least [`MIN_API_KEY_LEN`] characters long.
///
/// Length is counted in Unicode scalar values, not bytes or UTF-16 units.
pub(crate) fn check_api_key(api_key: Option<&str>) -> Option<ValidationIssue> {
    match api_key {
        None | Some("") => Some(
            ValidationIssue::new(ErrorCode::MissingApiKey, "apiKey", "API key is required")
                .with_help(format!(
                    "Provide it as an argument or set the {} environment variable",
                    API_KEY_ENV
                )),
        ),
        Some(key) if key.chars().count() < MIN_API_KEY_LEN => Some(
            ValidationIssue::new(
                ErrorCode::ApiKeyTooShort,
                "apiKey",
                "API key appears to be too short",
            )
            .with_help(format!(
                "Scell.io API keys are at least {} characters long",
                MIN_API_KEY_LEN
            )),
        ),
        Some(_) => None,
    }
}

/// Base URL, when given, must be an http(s) URL.
pub(crate) fn check_base_url(base_url: Option<&str>) -> Option<ValidationIssue> {
    let url = base_url?;
    if url.starts_with("http://") || url.starts_with("https://") {
        return None;
    }
    Some(ValidationIssue::new(
        ErrorCode::InvalidBaseUrl,
        "baseUrl",
        "Base URL must start with http:// or https://",
    ))
}

/// Environment, when given, must be one of the recognized tags.
pub(crate) fn check_environment(environment: Option<&str>) -> Option<ValidationIssue> {
    let env = environment?;
    if env.parse::<Environment>().is_ok() {
        return None;
    }
    let valid: Vec<&str> = Environment::ALL.iter().map(Environment::as_str).collect();
    Some(ValidationIssue::new(
        ErrorCode::InvalidEnvironment,
        "environment",
        format!("Environment must be one of: {}", valid.join(", ")),
    ))
}
