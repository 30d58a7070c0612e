//! MCP configuration generators.
//!
//! All four clients receive the same document: a single `scell` entry under `mcpServers`
//! launching the HTTP proxy against the Scell.io API. The entry points are kept separate
//! because each client is a distinct consumer with its own file location.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::clients::McpClient;
use crate::config::ScellMcpConfig;
use crate::constants::{
    API_KEY_ENV, API_KEY_HEADER_VAR, AVAILABLE_TOOLS, BASE_URL_ENV, DOCS_URL, ENVIRONMENT_ENV,
    LAUNCHER_COMMAND, LAUNCHER_PACKAGE, SERVER_NAME,
};
use crate::error::ScellResult;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// How an MCP client starts the Scell.io proxy process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerLaunchDescriptor {
    pub command: String,
    pub args: Vec<String>,
    /// Environment handed to the process, in insertion order.
    pub env: IndexMap<String, String>,
}

/// Document read by Claude Desktop, Cursor and VS Code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpClientConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, ServerLaunchDescriptor>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ServerLaunchDescriptor {
    /// Build the launch descriptor for a validated configuration.
    ///
    /// The API key is exported twice, as `X-Scell-API-Key` and `SCELL_API_KEY`, since
    /// consumers read either name. `SCELL_ENVIRONMENT` is only set when an environment is.
    pub fn for_config(config: &ScellMcpConfig) -> Self {
        let base_url = config.effective_base_url();

        let mut env = IndexMap::new();
        env.insert(API_KEY_HEADER_VAR.to_string(), config.api_key().to_string());
        env.insert(API_KEY_ENV.to_string(), config.api_key().to_string());
        env.insert(BASE_URL_ENV.to_string(), base_url.clone());
        if let Some(environment) = config.environment() {
            env.insert(ENVIRONMENT_ENV.to_string(), environment.as_str().to_string());
        }

        Self {
            command: LAUNCHER_COMMAND.to_string(),
            args: vec!["-y".to_string(), LAUNCHER_PACKAGE.to_string(), base_url],
            env,
        }
    }
}

impl McpClientConfig {
    fn single(descriptor: ServerLaunchDescriptor) -> Self {
        let mut mcp_servers = BTreeMap::new();
        mcp_servers.insert(SERVER_NAME.to_string(), descriptor);
        Self { mcp_servers }
    }

    /// The `scell` server entry.
    pub fn server(&self) -> Option<&ServerLaunchDescriptor> {
        self.mcp_servers.get(SERVER_NAME)
    }

    /// Serialize with 2-space indentation.
    pub fn to_pretty_json(&self) -> ScellResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Generate configuration for Claude Desktop.
pub fn generate_claude_desktop_config(config: &ScellMcpConfig) -> McpClientConfig {
    McpClientConfig::single(ServerLaunchDescriptor::for_config(config))
}

/// Generate configuration for Cursor (`.cursor/mcp.json` in the project root).
pub fn generate_cursor_config(config: &ScellMcpConfig) -> McpClientConfig {
    McpClientConfig::single(ServerLaunchDescriptor::for_config(config))
}

/// Generate configuration for VS Code (`.vscode/mcp.json` in the project root).
pub fn generate_vscode_config(config: &ScellMcpConfig) -> McpClientConfig {
    McpClientConfig::single(ServerLaunchDescriptor::for_config(config))
}

/// Generate configuration for any other MCP-compatible client.
pub fn generate_generic_config(config: &ScellMcpConfig) -> McpClientConfig {
    McpClientConfig::single(ServerLaunchDescriptor::for_config(config))
}

/// Generate configuration for `client`.
pub fn generate_for(client: McpClient, config: &ScellMcpConfig) -> McpClientConfig {
    match client {
        McpClient::ClaudeDesktop => generate_claude_desktop_config(config),
        McpClient::Cursor => generate_cursor_config(config),
        McpClient::Vscode => generate_vscode_config(config),
        McpClient::Generic => generate_generic_config(config),
    }
}

/// Render the configuration as annotated text.
///
/// A `//` comment header names the client, the destination path and every tool the server
/// exposes, followed by a blank line and the pretty-printed document.
pub fn generate_config_with_instructions(
    config: &ScellMcpConfig,
    client: McpClient,
    save_to: &Path,
) -> ScellResult<String> {
    let tools: String = AVAILABLE_TOOLS
        .iter()
        .map(|(name, description)| format!("// - {}: {}\n", name, description))
        .collect();

    let mut out = format!(
        "// Scell.io MCP Configuration for {}\n//\n// Save this configuration to: {}\n//\n// Available tools:\n",
        client.display_name(),
        save_to.display()
    );
    out.push_str(&tools);
    out.push_str(&format!("//\n// Documentation: {}\n", DOCS_URL));
    out.push('\n');

    out.push_str(&generate_for(client, config).to_pretty_json()?);
    Ok(out)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
