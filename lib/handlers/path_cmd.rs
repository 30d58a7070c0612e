//! Handler for `scell-mcp path`.

use crate::clients::{HomeDirs, McpClient, Platform};
use crate::error::ScellResult;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Print the config path `client` reads on `os` (current platform if omitted).
pub fn print_config_path(client: &str, os: Option<&str>) -> ScellResult<()> {
    let client = McpClient::parse(client)?;
    let platform = os.map(Platform::parse).transpose()?.unwrap_or_else(Platform::current);

    tracing::debug!(client = %client, platform = %platform, "resolving config path");

    println!("{}", client.config_path(platform, &HomeDirs::detect()).display());
    Ok(())
}
