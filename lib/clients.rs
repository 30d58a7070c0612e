//! MCP client definitions and config path lookup.
//!
//! Paths are advisory: nothing here checks that a file exists or creates one. The home
//! directory is passed in through [`HomeDirs`] so lookups stay pure and testable for any
//! platform.

use std::fmt;
use std::path::PathBuf;

use crate::constants::GENERIC_CONFIG_FILE;
use crate::error::{ScellError, ScellResult};
use crate::suggest::suggest;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CLAUDE_DESKTOP_CONFIG_FILE: &str = "claude_desktop_config.json";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Supported MCP client applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum McpClient {
    ClaudeDesktop,
    Cursor,
    Vscode,
    /// Any MCP client without an established config file convention.
    Generic,
}

/// Operating systems with distinct config locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

/// User directories the path lookup is relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDirs {
    /// User home directory.
    pub home: PathBuf,
    /// Windows roaming application data directory (`%APPDATA%`).
    pub appdata: Option<PathBuf>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl McpClient {
    /// Parse client name from string (case-insensitive, supports aliases).
    pub fn parse(s: &str) -> ScellResult<Self> {
        match s.to_lowercase().as_str() {
            "claude" | "claude-desktop" | "claudedesktop" | "cd" => Ok(Self::ClaudeDesktop),
            "cursor" => Ok(Self::Cursor),
            "vscode" | "vs-code" | "vsc" | "code" => Ok(Self::Vscode),
            "generic" => Ok(Self::Generic),
            _ => Err(ScellError::InvalidClient {
                name: s.to_string(),
                suggestion: suggest(s, &Self::canonical_names()),
            }),
        }
    }

    /// Get human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "Claude Desktop",
            Self::Cursor => "Cursor",
            Self::Vscode => "VS Code",
            Self::Generic => "Generic",
        }
    }

    /// Get canonical name, as used on the command line.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::ClaudeDesktop => "claude",
            Self::Cursor => "cursor",
            Self::Vscode => "vscode",
            Self::Generic => "generic",
        }
    }

    /// Get all supported clients.
    pub fn all() -> &'static [McpClient] {
        &[Self::ClaudeDesktop, Self::Cursor, Self::Vscode, Self::Generic]
    }

    fn canonical_names() -> Vec<&'static str> {
        Self::all().iter().map(McpClient::canonical_name).collect()
    }

    /// Get the path this client conventionally reads its MCP configuration from.
    ///
    /// Cursor and VS Code read a project-relative file; Claude Desktop reads a per-user file
    /// whose location depends on the platform.
    pub fn config_path(&self, platform: Platform, dirs: &HomeDirs) -> PathBuf {
        match self {
            Self::ClaudeDesktop => claude_desktop_path(platform, dirs),
            Self::Cursor => PathBuf::from(".cursor").join("mcp.json"),
            Self::Vscode => PathBuf::from(".vscode").join("mcp.json"),
            Self::Generic => PathBuf::from(GENERIC_CONFIG_FILE),
        }
    }
}

impl Platform {
    /// Parse platform name (accepts Node-style `darwin`/`win32` as well).
    pub fn parse(s: &str) -> ScellResult<Self> {
        match s.to_lowercase().as_str() {
            "macos" | "darwin" | "mac" => Ok(Self::MacOs),
            "windows" | "win32" | "win" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "other" => Ok(Self::Other),
            _ => Err(ScellError::InvalidPlatform {
                name: s.to_string(),
                suggestion: suggest(s, &["macos", "windows", "linux", "other"]),
            }),
        }
    }

    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

impl HomeDirs {
    /// Directories rooted at `home`, without an `%APPDATA%` override.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            appdata: None,
        }
    }

    /// Set the `%APPDATA%` directory.
    pub fn with_appdata(mut self, appdata: impl Into<PathBuf>) -> Self {
        self.appdata = Some(appdata.into());
        self
    }

    /// Resolve the current user's directories from the process environment.
    ///
    /// Falls back to `~` when no home directory can be determined.
    pub fn detect() -> Self {
        let home = dirs::home_dir()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .or_else(|| std::env::var_os("USERPROFILE").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("~"));
        let appdata = std::env::var_os("APPDATA")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { home, appdata }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn claude_desktop_path(platform: Platform, dirs: &HomeDirs) -> PathBuf {
    match platform {
        Platform::MacOs => dirs
            .home
            .join("Library")
            .join("Application Support")
            .join("Claude")
            .join(CLAUDE_DESKTOP_CONFIG_FILE),
        Platform::Windows => dirs
            .appdata
            .clone()
            .unwrap_or_else(|| dirs.home.join("AppData").join("Roaming"))
            .join("Claude")
            .join(CLAUDE_DESKTOP_CONFIG_FILE),
        Platform::Linux | Platform::Other => dirs
            .home
            .join(".config")
            .join("Claude")
            .join(CLAUDE_DESKTOP_CONFIG_FILE),
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl fmt::Display for McpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs() -> HomeDirs {
        HomeDirs::new("/home/alice")
    }

    #[test]
    fn test_client_parse() {
        assert!(matches!(McpClient::parse("claude"), Ok(McpClient::ClaudeDesktop)));
        assert!(matches!(
            McpClient::parse("claude-desktop"),
            Ok(McpClient::ClaudeDesktop)
        ));
        assert!(matches!(McpClient::parse("cd"), Ok(McpClient::ClaudeDesktop)));
        assert!(matches!(McpClient::parse("Cursor"), Ok(McpClient::Cursor)));
        assert!(matches!(McpClient::parse("vscode"), Ok(McpClient::Vscode)));
        assert!(matches!(McpClient::parse("vs-code"), Ok(McpClient::Vscode)));
        assert!(matches!(McpClient::parse("code"), Ok(McpClient::Vscode)));
        assert!(matches!(McpClient::parse("generic"), Ok(McpClient::Generic)));
        assert!(McpClient::parse("zed").is_err());
    }

    #[test]
    fn test_client_parse_suggestion() {
        match McpClient::parse("cursr") {
            Err(ScellError::InvalidClient { name, suggestion }) => {
                assert_eq!(name, "cursr");
                assert!(suggestion.unwrap().contains("`cursor`"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!(Platform::parse("darwin").unwrap(), Platform::MacOs);
        assert_eq!(Platform::parse("macos").unwrap(), Platform::MacOs);
        assert_eq!(Platform::parse("win32").unwrap(), Platform::Windows);
        assert_eq!(Platform::parse("Linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::parse("other").unwrap(), Platform::Other);
        assert!(matches!(
            Platform::parse("freebsd"),
            Err(ScellError::InvalidPlatform { .. })
        ));
    }

    #[test]
    fn test_claude_desktop_paths() {
        let client = McpClient::ClaudeDesktop;
        assert_eq!(
            client.config_path(Platform::MacOs, &dirs()),
            PathBuf::from("/home/alice/Library/Application Support/Claude/claude_desktop_config.json")
        );
        assert_eq!(
            client.config_path(Platform::Linux, &dirs()),
            PathBuf::from("/home/alice/.config/Claude/claude_desktop_config.json")
        );
        assert_eq!(
            client.config_path(Platform::Other, &dirs()),
            client.config_path(Platform::Linux, &dirs())
        );
    }

    #[test]
    fn test_claude_desktop_windows_path() {
        let client = McpClient::ClaudeDesktop;
        assert_eq!(
            client.config_path(Platform::Windows, &dirs()),
            PathBuf::from("/home/alice")
                .join("AppData")
                .join("Roaming")
                .join("Claude")
                .join("claude_desktop_config.json")
        );

        let with_appdata = dirs().with_appdata("/roaming");
        assert_eq!(
            client.config_path(Platform::Windows, &with_appdata),
            PathBuf::from("/roaming")
                .join("Claude")
                .join("claude_desktop_config.json")
        );
    }

    #[test]
    fn test_project_relative_paths_ignore_platform() {
        for platform in [
            Platform::MacOs,
            Platform::Windows,
            Platform::Linux,
            Platform::Other,
        ] {
            assert_eq!(
                McpClient::Cursor.config_path(platform, &dirs()),
                PathBuf::from(".cursor/mcp.json")
            );
            assert_eq!(
                McpClient::Vscode.config_path(platform, &dirs()),
                PathBuf::from(".vscode/mcp.json")
            );
            assert_eq!(
                McpClient::Generic.config_path(platform, &dirs()),
                PathBuf::from("mcp.json")
            );
        }
    }

    #[test]
    fn test_client_names() {
        assert_eq!(McpClient::ClaudeDesktop.canonical_name(), "claude");
        assert_eq!(McpClient::ClaudeDesktop.display_name(), "Claude Desktop");
        assert_eq!(McpClient::Vscode.display_name(), "VS Code");
        assert_eq!(McpClient::all().len(), 4);
    }
}
