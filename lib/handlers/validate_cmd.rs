//! Handler for `scell-mcp validate`.

use colored::Colorize;

use crate::commands::ConfigArgs;
use crate::error::ScellResult;
use crate::validate::{ValidationResult, validate_config};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Validate configuration values and report every problem found.
pub fn validate_input(args: ConfigArgs, json_output: bool) -> ScellResult<()> {
    let result = validate_config(&args.resolve_from_env());

    if json_output {
        output_json(&result)?;
    } else {
        output_full(&result);
    }

    check_exit_status(&result);
    Ok(())
}

/// Output validation result as JSON.
fn output_json(result: &ValidationResult) -> ScellResult<()> {
    let output = serde_json::json!({
        "valid": result.is_valid(),
        "errors": result.errors,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output validation result in full format.
fn output_full(result: &ValidationResult) {
    for issue in &result.errors {
        println!(
            "  {}: → {}",
            format!("error[{}]", issue.code).bright_red().bold(),
            issue.field.bold()
        );
        match &issue.help {
            Some(help) => {
                println!("      {} {}", "├─".dimmed(), issue.message.dimmed());
                println!(
                    "      {} {}: {}",
                    "└─".dimmed(),
                    "help".bright_green().dimmed(),
                    help.dimmed()
                );
            }
            None => println!("      {} {}", "└─".dimmed(), issue.message.dimmed()),
        }
        println!();
    }

    match result.errors.len() {
        0 => println!("  {} valid", "✓".bright_green()),
        1 => println!("  {} 1 error", "✗".bright_red()),
        n => println!("  {} {} errors", "✗".bright_red(), n),
    }
}

/// Exit with an error status when validation failed.
fn check_exit_status(result: &ValidationResult) {
    if !result.is_valid() {
        std::process::exit(1);
    }
}
