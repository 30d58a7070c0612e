//! Error types for scell-mcp.

use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Result type for scell-mcp operations.
pub type ScellResult<T> = Result<T, ScellError>;

/// Error type for scell-mcp operations.
#[derive(Debug, Error)]
pub enum ScellError {
    /// One or more configuration fields failed validation.
    #[error("Configuration validation failed")]
    ValidationFailed(crate::validate::ValidationResult),

    /// Unrecognized MCP client name.
    #[error("Unknown client: {name}")]
    InvalidClient {
        name: String,
        suggestion: Option<String>,
    },

    /// Unrecognized operating system name.
    #[error("Unknown platform: {name}")]
    InvalidPlatform {
        name: String,
        suggestion: Option<String>,
    },

    /// Unrecognized environment tag.
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
