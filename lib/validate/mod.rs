//! Configuration input validation.

mod codes;
mod result;
mod rules;

#[cfg(test)]
mod tests;

use crate::config::ConfigInput;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use codes::ErrorCode;
pub use result::{ValidationIssue, ValidationResult};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate a configuration input.
///
/// Every rule runs regardless of earlier failures, so the result lists all problems.
pub fn validate_config(input: &ConfigInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    let issues = [
        rules::check_api_key(input.api_key.as_deref()),
        rules::check_base_url(input.base_url.as_deref()),
        rules::check_environment(input.environment.as_deref()),
    ];

    for issue in issues.into_iter().flatten() {
        result.push(issue);
    }

    result
}
