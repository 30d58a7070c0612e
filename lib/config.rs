//! Configuration input types.
//!
//! [`ConfigInput`] is the raw, possibly partial record a caller hands in. It only becomes a
//! [`ScellMcpConfig`] after passing [`validate_config`], so every generator works on data that
//! is known to be well formed.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, SANDBOX_PATH_SUFFIX};
use crate::error::{ScellError, ScellResult};
use crate::validate::validate_config;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Scell.io deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Staging,
    Development,
}

/// Raw configuration as supplied by a caller.
///
/// Every field is optional so that validation can report all problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInput {
    /// Scell.io API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL (defaults to `https://api.scell.io/api`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Environment tag: production, staging or development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    /// Target the sandbox endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,
}

/// Validated configuration. Construct with `ScellMcpConfig::try_from(input)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScellMcpConfig {
    api_key: String,
    base_url: Option<String>,
    environment: Option<Environment>,
    sandbox: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Environment {
    /// All recognized environments, in display order.
    pub const ALL: [Environment; 3] = [
        Environment::Production,
        Environment::Staging,
        Environment::Development,
    ];

    /// Get the wire name of the environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
        }
    }
}

impl ConfigInput {
    /// Create an input carrying only an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the environment tag.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the sandbox flag.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }
}

impl ScellMcpConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn environment(&self) -> Option<Environment> {
        self.environment
    }

    pub fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Base URL the proxy should target.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`]; sandbox mode appends `/sandbox`.
    pub fn effective_base_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        if self.sandbox {
            format!("{}{}", base.strip_suffix('/').unwrap_or(base), SANDBOX_PATH_SUFFIX)
        } else {
            base.to_string()
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ScellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.as_str() == s)
            .ok_or_else(|| ScellError::InvalidEnvironment(s.to_string()))
    }
}

impl TryFrom<ConfigInput> for ScellMcpConfig {
    type Error = ScellError;

    fn try_from(input: ConfigInput) -> ScellResult<Self> {
        let result = validate_config(&input);
        if !result.is_valid() {
            return Err(ScellError::ValidationFailed(result));
        }

        let environment = input
            .environment
            .as_deref()
            .map(str::parse::<Environment>)
            .transpose()?;

        Ok(Self {
            api_key: input.api_key.unwrap_or_default(),
            base_url: input.base_url,
            environment,
            sandbox: input.sandbox.unwrap_or(false),
        })
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
