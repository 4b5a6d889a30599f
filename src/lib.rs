//! Tar Shell - a small shell emulator over the contents of a tar archive.
//!
//! The archive's member list is turned into an in-memory directory tree on
//! startup. A [`Session`] then answers `ls`, `cd`, `cp`, `tree`, `uptime` and
//! `exit` against that tree while tracking a current directory. Nothing is
//! ever written back to the archive.
//!
//! # Public API
//! - [`Session`]: command interpreter, `process(line) -> output`
//! - [`Shell`]: prompt-driven front-end over a session
//! - [`core`]: archive reading, tree, path resolution, errors, config

pub mod commands;
pub mod core;
pub mod session;
pub mod shell;

pub use crate::core::{
    read_archive, ArchiveEntry, Command, EntryKind, PathResolver, Result, ShellConfig,
    TarShellError, VirtualFs,
};
pub use session::Session;
pub use shell::Shell;
