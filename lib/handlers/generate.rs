//! Handler for the claude/cursor/vscode/generic commands.

use std::path::Path;

use colored::Colorize;

use crate::clients::{HomeDirs, McpClient, Platform};
use crate::commands::GenerateArgs;
use crate::config::ScellMcpConfig;
use crate::error::ScellResult;
use crate::generator::{generate_config_with_instructions, generate_for};
use crate::output::write_config_file;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Generate configuration for `client` and print it or write it to `--output`.
pub fn generate_config(client: McpClient, args: GenerateArgs) -> ScellResult<()> {
    let input = args.config.resolve_from_env();
    tracing::debug!(
        client = client.canonical_name(),
        has_api_key = input.api_key.is_some(),
        base_url = ?input.base_url,
        environment = ?input.environment,
        "resolved configuration input"
    );

    let config = ScellMcpConfig::try_from(input)?;
    let config_path = client.config_path(Platform::current(), &HomeDirs::detect());

    let text = emit(client, &config, &config_path, args.output.as_deref())?;
    println!("{}", text);

    Ok(())
}

/// Produce the text the command prints.
///
/// With `output` set, the rendered document goes to that file and the text is a confirmation
/// line. Otherwise the text is the document followed by the save-to hint.
fn emit(
    client: McpClient,
    config: &ScellMcpConfig,
    config_path: &Path,
    output: Option<&Path>,
) -> ScellResult<String> {
    match output {
        Some(path) => {
            write_config_file(path, &render(client, config, config_path)?)?;
            tracing::info!(path = %path.display(), "wrote configuration");
            Ok(format!(
                "  {} Configuration written to: {}",
                "✓".bright_green(),
                path.display().to_string().bold()
            ))
        }
        None => render_stdout(client, config, config_path),
    }
}

/// Document plus the trailing save-to hint, exactly as printed to stdout.
fn render_stdout(
    client: McpClient,
    config: &ScellMcpConfig,
    config_path: &Path,
) -> ScellResult<String> {
    Ok(format!(
        "{}\n\n// Save this configuration to: {}",
        render(client, config, config_path)?,
        config_path.display()
    ))
}

/// Named clients get bare JSON; the generic client gets the annotated form.
fn render(client: McpClient, config: &ScellMcpConfig, config_path: &Path) -> ScellResult<String> {
    match client {
        McpClient::Generic => generate_config_with_instructions(config, client, config_path),
        _ => generate_for(client, config).to_pretty_json(),
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::ConfigInput;

    fn config() -> ScellMcpConfig {
        ScellMcpConfig::try_from(ConfigInput::new("sk_live_abcdef1234")).unwrap()
    }

    fn path_for(client: McpClient) -> std::path::PathBuf {
        client.config_path(Platform::Linux, &HomeDirs::new("/home/alice"))
    }

    #[test]
    fn test_stdout_named_client_is_json_then_hint() {
        let path = path_for(McpClient::ClaudeDesktop);
        let text = render_stdout(McpClient::ClaudeDesktop, &config(), &path).unwrap();

        assert!(text.starts_with('{'));
        assert!(text.ends_with(&format!(
            "}}\n\n// Save this configuration to: {}",
            path.display()
        )));
        assert!(path.ends_with(".config/Claude/claude_desktop_config.json"));

        let (json, _) = text.rsplit_once("\n\n").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(parsed["mcpServers"]["scell"].is_object());
    }

    #[test]
    fn test_stdout_cursor_hint_uses_cursor_path() {
        let path = path_for(McpClient::Cursor);
        let text = render_stdout(McpClient::Cursor, &config(), &path).unwrap();

        assert!(text.starts_with('{'));
        assert!(text.ends_with(&format!(
            "// Save this configuration to: {}",
            std::path::Path::new(".cursor").join("mcp.json").display()
        )));
    }

    #[test]
    fn test_stdout_generic_starts_with_header() {
        let path = path_for(McpClient::Generic);
        let text = render_stdout(McpClient::Generic, &config(), &path).unwrap();

        assert!(text.starts_with("// Scell.io MCP Configuration for Generic\n"));
        assert!(text.contains("// Documentation: https://docs.scell.io\n\n{"));
        assert!(text.ends_with(&format!(
            "}}\n\n// Save this configuration to: {}",
            path.display()
        )));
    }

    #[test]
    fn test_emit_without_output_prints_document() {
        let path = path_for(McpClient::Vscode);
        assert_eq!(
            emit(McpClient::Vscode, &config(), &path, None).unwrap(),
            render_stdout(McpClient::Vscode, &config(), &path).unwrap()
        );
    }

    #[test]
    fn test_emit_with_output_writes_file_without_hint() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("mcp.json");
        let path = path_for(McpClient::ClaudeDesktop);

        let text = emit(McpClient::ClaudeDesktop, &config(), &path, Some(&target)).unwrap();

        assert!(text.contains("Configuration written to: "));
        assert!(text.contains(&target.display().to_string()));

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(
            written,
            render(McpClient::ClaudeDesktop, &config(), &path).unwrap()
        );
        assert!(!written.contains("// Save this configuration to"));
    }
}
