//! CLI command definitions.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};

use crate::config::{ConfigInput, Environment};
use crate::constants::{API_KEY_ENV, BASE_URL_ENV};
use crate::examples;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

const CLAUDE_EXAMPLES: &str = examples![
    "scell-mcp claude sk_live_xxxxxxxxxx              " # "Print Claude Desktop config",
    "scell-mcp claude sk_live_xxxxxxxxxx -o cfg.json  " # "Write config to a file",
    "SCELL_API_KEY=sk_live_xxxxxxxxxx scell-mcp claude" # "Read the key from the environment",
];

const CURSOR_EXAMPLES: &str = examples![
    "scell-mcp cursor sk_live_xxxxxxxxxx                              " # "Print Cursor config",
    "scell-mcp cursor sk_live_xxxxxxxxxx -o .cursor/mcp.json          " # "Write project config",
    "scell-mcp cursor sk_live_xxxxxxxxxx --base-url https://api.staging.scell.io/api" # "Custom API base URL",
];

const VSCODE_EXAMPLES: &str = examples![
    "scell-mcp vscode sk_live_xxxxxxxxxx                     " # "Print VS Code config",
    "scell-mcp vscode sk_live_xxxxxxxxxx -o .vscode/mcp.json " # "Write project config",
    "scell-mcp vscode sk_live_xxxxxxxxxx --env development   " # "Tag the environment",
];

const GENERIC_EXAMPLES: &str = examples![
    "scell-mcp generic sk_live_xxxxxxxxxx            " # "Annotated config for any MCP client",
    "scell-mcp generic sk_live_xxxxxxxxxx --sandbox  " # "Target the sandbox endpoint",
];

const PATH_EXAMPLES: &str = examples![
    "scell-mcp path claude             " # "Claude Desktop config path on this OS",
    "scell-mcp path claude --os windows" # "Claude Desktop config path on Windows",
    "scell-mcp path cursor             " # "Cursor project config path",
];

const VALIDATE_EXAMPLES: &str = examples![
    "scell-mcp validate sk_live_xxxxxxxxxx          " # "Check a key",
    "scell-mcp validate --base-url api.scell.io     " # "Report every problem at once",
    "scell-mcp validate sk_live_xxxxxxxxxx --json   " # "JSON output for scripts",
];

const CLI_EXAMPLES: &str = concat!(
    examples![
        "scell-mcp claude sk_live_your_api_key_here" # "Generate Claude Desktop config",
        "scell-mcp cursor sk_live_your_api_key_here --base-url https://api.staging.scell.io/api" # "Custom base URL",
        "scell-mcp claude sk_live_your_api_key_here --output ~/.config/Claude/claude_desktop_config.json" # "Save to file",
        "scell-mcp path claude" # "Where Claude Desktop reads its config",
    ],
    "\n\n",
    "Environment variables:\n",
    "  SCELL_API_KEY    Default API key (used if not provided as argument)\n",
    "  SCELL_BASE_URL   Default base URL\n",
    "  RUST_LOG         Enable debug logging (e.g. RUST_LOG=debug)\n",
    "\n",
    "For more information, visit: https://docs.scell.io",
);

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Scell.io MCP configuration generator.
#[derive(Debug, Parser)]
#[command(name = "scell-mcp", author, version, styles = styles())]
#[command(
    about = "Generate Scell.io MCP configuration for Claude Desktop, Cursor, VS Code and other MCP clients",
    after_help = CLI_EXAMPLES
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate Claude Desktop configuration.
    #[command(alias = "claude-desktop", after_help = CLAUDE_EXAMPLES)]
    Claude(GenerateArgs),

    /// Generate Cursor IDE configuration.
    #[command(after_help = CURSOR_EXAMPLES)]
    Cursor(GenerateArgs),

    /// Generate VS Code configuration.
    #[command(alias = "vs-code", after_help = VSCODE_EXAMPLES)]
    Vscode(GenerateArgs),

    /// Generate generic MCP configuration with usage notes.
    #[command(after_help = GENERIC_EXAMPLES)]
    Generic(GenerateArgs),

    /// Print the config file path a client reads.
    #[command(after_help = PATH_EXAMPLES)]
    Path {
        /// Target client (claude, cursor, vscode, generic).
        client: String,

        /// Operating system (macos, windows, linux, other). Defaults to the current one.
        #[arg(long = "os", value_name = "OS")]
        os: Option<String>,
    },

    /// Check configuration values without generating anything.
    #[command(after_help = VALIDATE_EXAMPLES)]
    Validate {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Configuration values shared by every generating command.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Scell.io API key (default: $SCELL_API_KEY).
    pub api_key: Option<String>,

    /// Custom API base URL (default: $SCELL_BASE_URL, then https://api.scell.io/api).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Environment tag passed to the server.
    #[arg(long = "env", value_enum, value_name = "ENVIRONMENT")]
    pub environment: Option<Environment>,

    /// Use sandbox mode (appends /sandbox to the base URL).
    #[arg(long)]
    pub sandbox: bool,
}

/// Arguments for the claude/cursor/vscode/generic commands.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write configuration to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ConfigArgs {
    /// Resolve command-line values against fallback variables into a [`ConfigInput`].
    ///
    /// Explicit arguments win; `lookup` is consulted for `SCELL_API_KEY` and
    /// `SCELL_BASE_URL`. Empty values count as unset.
    pub fn resolve<F>(self, lookup: F) -> ConfigInput
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = |name: &str| lookup(name).filter(|v| !v.is_empty());

        ConfigInput {
            api_key: self
                .api_key
                .filter(|k| !k.is_empty())
                .or_else(|| fallback(API_KEY_ENV)),
            base_url: self
                .base_url
                .filter(|u| !u.is_empty())
                .or_else(|| fallback(BASE_URL_ENV)),
            environment: self.environment.map(|e| e.as_str().to_string()),
            sandbox: self.sandbox.then_some(true),
        }
    }

    /// [`resolve`](Self::resolve) against the process environment.
    pub fn resolve_from_env(self) -> ConfigInput {
        self.resolve(|name| std::env::var(name).ok())
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Help output styles.
pub fn styles() -> Styles {
    let bold = |color: AnsiColor| Style::new().bold().fg_color(Some(Color::Ansi(color)));
    let plain = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));

    Styles::styled()
        .header(bold(AnsiColor::Blue))
        .usage(bold(AnsiColor::Blue))
        .literal(plain(AnsiColor::Green))
        .placeholder(plain(AnsiColor::Cyan))
        .error(bold(AnsiColor::Red))
        .invalid(bold(AnsiColor::Red))
        .valid(bold(AnsiColor::Green))
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
