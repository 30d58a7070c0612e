//! Help text macros.

/// Build an `Examples:` block for clap's `after_help`.
///
/// ```ignore
/// const EXAMPLES: &str = examples![
///     "scell-mcp claude sk_live_xxx" # "Generate Claude Desktop config",
/// ];
/// ```
#[macro_export]
macro_rules! examples {
    ($($cmd:literal # $desc:literal),* $(,)?) => {
        $crate::examples_section!["Examples:"; $($cmd # $desc),*]
    };
}

/// Like [`examples!`] with a custom section title.
#[macro_export]
macro_rules! examples_section {
    ($title:literal; $($cmd:literal # $desc:literal),* $(,)?) => {
        concat!($title, $("\n  ", $cmd, "  # ", $desc),*)
    };
}
