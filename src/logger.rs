//! Logging utilities with colored output.
//!
//! Provides the `log!` macro for formatted terminal output with a
//! colored `[module]` prefix.

use owo_colors::OwoColorize;
use std::io::{Write, stdout};

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("rss"; "wrote {}", path.display());
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module {
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}
