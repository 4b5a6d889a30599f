//! Parsing of a shell input line into a [`Command`].
//!
//! The line is split on whitespace; the first word selects the verb and the
//! rest are its arguments. Verbs taking an optional path use the first
//! argument and ignore any others.

use crate::core::error::{Result, TarShellError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List a directory (current directory when no path is given)
    Ls { path: Option<String> },
    /// Change the current directory; no-op without a path
    Cd { path: Option<String> },
    /// Copy a file or directory
    Cp { source: String, target: String },
    /// Render the hierarchy below a directory
    Tree { path: Option<String> },
    Uptime,
    Exit,
}

impl Command {
    /// Parse one input line
    ///
    /// # Returns
    /// * `Ok(None)` - The line is blank
    /// * `Ok(Some(command))` - A known verb with valid arguments
    /// * `Err` - Unknown verb, or `cp` without exactly two arguments
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let first = || args.first().map(|arg| arg.to_string());

        let command = match verb {
            "ls" => Command::Ls { path: first() },
            "cd" => Command::Cd { path: first() },
            "tree" => Command::Tree { path: first() },
            "cp" => match args.as_slice() {
                [source, target] => Command::Cp {
                    source: source.to_string(),
                    target: target.to_string(),
                },
                _ => return Err(TarShellError::CpArgumentCount),
            },
            "uptime" => Command::Uptime,
            "exit" => Command::Exit,
            other => return Err(TarShellError::unknown_command(other)),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Ls { .. } => "ls",
            Command::Cd { .. } => "cd",
            Command::Cp { .. } => "cp",
            Command::Tree { .. } => "tree",
            Command::Uptime => "uptime",
            Command::Exit => "exit",
        }
    }
}
