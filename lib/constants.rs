//! Constants for scell-mcp.
//!
//! Everything that ends up verbatim in a generated configuration lives here:
//! the launcher command, the environment variable names handed to the proxy,
//! and the catalog of tools the remote server exposes.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Default Scell.io API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.scell.io/api";

/// Path segment appended to the base URL in sandbox mode.
pub const SANDBOX_PATH_SUFFIX: &str = "/sandbox";

/// Key of the single entry under `mcpServers`.
pub const SERVER_NAME: &str = "scell";

/// Executable used to launch the HTTP proxy.
pub const LAUNCHER_COMMAND: &str = "npx";

/// Package the launcher runs.
pub const LAUNCHER_PACKAGE: &str = "@modelcontextprotocol/server-http";

/// Header-style variable carrying the API key.
pub const API_KEY_HEADER_VAR: &str = "X-Scell-API-Key";

/// Environment variable carrying the API key. Also read by the CLI as a fallback.
pub const API_KEY_ENV: &str = "SCELL_API_KEY";

/// Environment variable carrying the base URL. Also read by the CLI as a fallback.
pub const BASE_URL_ENV: &str = "SCELL_BASE_URL";

/// Environment variable carrying the environment tag.
pub const ENVIRONMENT_ENV: &str = "SCELL_ENVIRONMENT";

/// Minimum accepted API key length.
pub const MIN_API_KEY_LEN: usize = 10;

/// Scell.io documentation.
pub const DOCS_URL: &str = "https://docs.scell.io";

/// File name used when a client has no conventional location.
pub const GENERIC_CONFIG_FILE: &str = "mcp.json";

/// Tools exposed by the Scell.io MCP server, listed in the generic output header.
pub const AVAILABLE_TOOLS: &[(&str, &str)] = &[
    ("scell_health_check", "Check API health status"),
    ("scell_validate_api_key", "Validate your API key"),
    ("scell_create_invoice", "Create a new electronic invoice"),
    ("scell_get_invoice", "Retrieve an invoice by ID"),
    ("scell_list_invoices", "List all invoices"),
    ("scell_download_invoice", "Download invoice PDF/XML"),
    ("scell_create_signature", "Create a signature request"),
    ("scell_get_signature", "Get signature request status"),
    ("scell_list_signatures", "List all signature requests"),
    ("scell_download_signed", "Download signed document"),
    ("scell_cancel_signature", "Cancel a signature request"),
    ("scell_send_reminder", "Send signing reminder"),
];
