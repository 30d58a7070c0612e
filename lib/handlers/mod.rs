//! Command handlers.

mod generate;
mod path_cmd;
mod validate_cmd;

//--------------------------------------------------------------------------------------------------
// Re-Exports
//--------------------------------------------------------------------------------------------------

pub use generate::generate_config;
pub use path_cmd::print_config_path;
pub use validate_cmd::validate_input;
