//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TarShellError`] which covers every failure mode of the
//! shell: fatal startup problems (archive, script, config) as well as the
//! recoverable per-command errors whose display text is shown to the user.
//!
//! # Public API
//! - [`TarShellError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TarShellError>`
//!
//! # Error Categories
//! - **Archive**: missing file, not a tar archive (fatal)
//! - **Startup files**: script and config read/parse failures (fatal)
//! - **Commands**: unresolvable paths, bad arguments, unknown verbs (recoverable)

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for tar-shell
#[derive(Error, Debug)]
pub enum TarShellError {
    // Archive errors
    #[error("Archive does not exist: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("There is no .tar archive at '{path}' ({reason}). Please create it before running the program.")]
    ArchiveInvalid { path: PathBuf, reason: String },

    // Startup file errors
    #[error("Failed to read startup script '{path}': {source}")]
    ScriptReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Command errors, shown verbatim to the user followed by a newline
    #[error("There is no directory with name '{name}'")]
    NoSuchDirectory { name: String },

    #[error("There is no such file or directory with name '{name}'")]
    NoSuchFileOrDirectory { name: String },

    #[error("'{name}' is not a directory.")]
    NotADirectory { name: String },

    #[error("Cannot copy directory that contains or equal to target directory!")]
    CopyIntoItself,

    #[error("Command 'cp' must have two arguments.")]
    CpArgumentCount,

    #[error("Command \"{verb}\" is not found")]
    UnknownCommand { verb: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using TarShellError
pub type Result<T> = std::result::Result<T, TarShellError>;

impl TarShellError {
    /// Create an archive not found error
    pub fn archive_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ArchiveNotFound { path: path.into() }
    }

    /// Create an invalid archive error with a short reason
    pub fn archive_invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ArchiveInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn script_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScriptReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a "no directory" error for `ls`, `cd` and `tree`
    pub fn no_such_directory(name: impl Into<String>) -> Self {
        Self::NoSuchDirectory { name: name.into() }
    }

    /// Create a "no file or directory" error for `cp`
    pub fn no_such_file_or_directory(name: impl Into<String>) -> Self {
        Self::NoSuchFileOrDirectory { name: name.into() }
    }

    pub fn not_a_directory(name: impl Into<String>) -> Self {
        Self::NotADirectory { name: name.into() }
    }

    pub fn unknown_command(verb: impl Into<String>) -> Self {
        Self::UnknownCommand { verb: verb.into() }
    }

    /// Whether the error is a per-command error that leaves the session usable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoSuchDirectory { .. }
                | Self::NoSuchFileOrDirectory { .. }
                | Self::NotADirectory { .. }
                | Self::CopyIntoItself
                | Self::CpArgumentCount
                | Self::UnknownCommand { .. }
        )
    }
}
