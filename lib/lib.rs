//! `scell-mcp` library.
//!
//! Generates MCP client configuration that launches an HTTP proxy against the Scell.io API.
//! Validation, generation and path lookup are pure; reading the environment and writing files
//! is left to the command handlers.

pub mod macros;

pub mod clients;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod output;
pub mod suggest;
pub mod validate;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use clients::*;
pub use commands::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use generator::*;
pub use output::*;
pub use validate::*;
