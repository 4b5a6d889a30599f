//! Core functionality for the tar-shell tool.
//!
//! This module provides the building blocks the session is made of: archive
//! reading, the in-memory tree, path resolution, command parsing, error
//! handling and terminal output.

pub mod archive;
pub mod command;
pub mod config;
pub mod dirs;
pub mod error;
pub mod output;
pub mod path_resolver;
pub mod vfs;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{Result, TarShellError};

// === Archive reading ===
// Flat member list of a .tar / .tar.gz file
pub use archive::{read_archive, ArchiveEntry, EntryKind};

// === Virtual filesystem ===
// Directory tree and file set keyed by canonical `~/...` paths
pub use vfs::{leaf_name, parent_path, VirtualFs, ROOT};

// === Path resolution ===
// Relative, parent-relative and absolute path expressions
pub use path_resolver::PathResolver;

// === Commands ===
// Closed set of shell verbs parsed from an input line
pub use command::Command;

// === Configuration ===
pub use config::{ShellConfig, DEFAULT_TREE_MARKER};

// === Output formatting ===
pub use output::{format_prompt, print_error};
