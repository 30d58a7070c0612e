//! `scell-mcp` is the primary CLI binary.

use clap::Parser;
use colored::Colorize;
use scell_mcp::handlers;
use scell_mcp::{API_KEY_ENV, Cli, Command, ErrorCode, McpClient, ScellError, ScellResult};
use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn main() {
    // Initialize tracing - only enable when RUST_LOG is set.
    init_tracing();

    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print an error with appropriate formatting based on error type.
fn print_error(e: &ScellError) {
    eprintln!();
    match e {
        ScellError::ValidationFailed(result) => {
            eprintln!(
                "  {} Configuration validation failed",
                "error".bright_red().bold()
            );
            eprintln!();
            for err in &result.errors {
                eprintln!(
                    "    {} → {}",
                    format!("error[{}]", err.code).bright_red(),
                    err.field
                );
                eprintln!("      {}", err.message);
            }
            if result.has(ErrorCode::MissingApiKey) {
                eprintln!();
                eprintln!(
                    "    {}: Provide it as an argument or set {}",
                    "hint".bright_blue().bold(),
                    API_KEY_ENV.bright_white()
                );
            }
        }
        ScellError::InvalidClient { name, suggestion }
        | ScellError::InvalidPlatform { name, suggestion } => {
            let kind = if matches!(e, ScellError::InvalidClient { .. }) {
                "client"
            } else {
                "platform"
            };
            eprintln!(
                "  {} Unknown {} '{}'",
                "error".bright_red().bold(),
                kind,
                name.bright_white()
            );
            if let Some(suggestion) = suggestion {
                eprintln!();
                eprintln!("    {}: {}", "hint".bright_blue().bold(), suggestion);
            }
        }
        // For all other errors, use a consistent styled format
        _ => {
            let msg = e.to_string();
            if let Some((prefix, rest)) = msg.split_once(": ")
                && prefix.ends_with("error")
            {
                eprintln!(
                    "  {} {}",
                    format!("error[{}]", prefix.to_lowercase().replace(" error", ""))
                        .bright_red()
                        .bold(),
                    rest.dimmed()
                );
            } else {
                eprintln!("  {} {}", "error".bright_red().bold(), msg);
            }
        }
    }
    eprintln!();
}

/// Initialize tracing. Only enables logging when RUST_LOG is set.
fn init_tracing() {
    let rust_log_set = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_some();

    // Without a subscriber, all tracing events are discarded.
    if !rust_log_set {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> ScellResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Claude(args) => handlers::generate_config(McpClient::ClaudeDesktop, args),

        Command::Cursor(args) => handlers::generate_config(McpClient::Cursor, args),

        Command::Vscode(args) => handlers::generate_config(McpClient::Vscode, args),

        Command::Generic(args) => handlers::generate_config(McpClient::Generic, args),

        Command::Path { client, os } => handlers::print_config_path(&client, os.as_deref()),

        Command::Validate { config, json } => handlers::validate_input(config, json),
    }
}
