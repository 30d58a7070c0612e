//! Validation result types.

use serde::Serialize;

use super::codes::ErrorCode;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Outcome of validating a [`ConfigInput`](crate::config::ConfigInput).
///
/// Errors are kept in the order the checks ran; validation never stops at the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Error code.
    pub code: ErrorCode,

    /// Offending input field (e.g., "apiKey").
    pub field: &'static str,

    /// Human-readable message.
    pub message: String,

    /// Optional help suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ValidationResult {
    /// Returns true if there are no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in check order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Returns true if any error carries `code`.
    pub fn has(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub(crate) fn push(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }
}

impl ValidationIssue {
    pub(crate) fn new(code: ErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
