//! Output formatting for the terminal front-end.
//!
//! # Design Principles
//! - **Command results are never styled**: they are printed exactly as the
//!   session returns them
//! - **Prompt and fatal errors are coloured** unless colour is turned off

use colored::*;

/// Formats and prints a fatal error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Build the `<username>@<hostname>:<cwd>$ ` prompt
///
/// With `color` the user and host are green and the directory blue.
pub fn format_prompt(username: &str, hostname: &str, cwd: &str, color: bool) -> String {
    if color {
        format!(
            "{}:{}$ ",
            format!("{username}@{hostname}").green().bold(),
            cwd.blue().bold()
        )
    } else {
        format!("{username}@{hostname}:{cwd}$ ")
    }
}
