//! Validation error codes.

use serde::Serialize;
use std::fmt;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// E001: No API key was supplied.
    #[serde(rename = "E001")]
    MissingApiKey,

    /// E002: API key is shorter than the minimum length.
    #[serde(rename = "E002")]
    ApiKeyTooShort,

    /// E003: Base URL does not use http:// or https://.
    #[serde(rename = "E003")]
    InvalidBaseUrl,

    /// E004: Environment is not production, staging or development.
    #[serde(rename = "E004")]
    InvalidEnvironment,
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::MissingApiKey => "E001",
            ErrorCode::ApiKeyTooShort => "E002",
            ErrorCode::InvalidBaseUrl => "E003",
            ErrorCode::InvalidEnvironment => "E004",
        };
        write!(f, "{}", code)
    }
}
