//! The command interpreter behind the shell prompt.
//!
//! A [`Session`] owns the virtual filesystem built from one archive together
//! with the current directory, the exit flag and the session start time. The
//! front-end feeds it one line at a time through [`Session::process`] and
//! prints whatever comes back.
//!
//! Recoverable command errors never escape `process`: they are rendered as
//! their message followed by a newline, and leave the session unchanged.

use crate::commands::{execute_cd, execute_cp, execute_ls, execute_tree, execute_uptime};
use crate::core::{
    archive::read_archive,
    command::Command,
    config::{ShellConfig, DEFAULT_TREE_MARKER},
    error::Result,
    vfs::{VirtualFs, ROOT},
};
use std::path::Path;
use std::time::Instant;

#[derive(Debug)]
pub struct Session {
    fs: VirtualFs,
    cur_dir: String,
    exit_requested: bool,
    started_at: Instant,
    tree_marker: String,
}

impl Session {
    /// Start a session at `~` over an already built tree
    pub fn new(fs: VirtualFs) -> Self {
        Self {
            fs,
            cur_dir: ROOT.to_string(),
            exit_requested: false,
            started_at: Instant::now(),
            tree_marker: DEFAULT_TREE_MARKER.to_string(),
        }
    }

    /// Read the archive at `archive` and start a session over its contents
    ///
    /// Fails before any session exists when the archive is missing or is not
    /// a tar archive.
    pub fn open(archive: &Path, config: &ShellConfig) -> Result<Self> {
        let entries = read_archive(archive)?;
        log::debug!("Loaded {} members from {}", entries.len(), archive.display());
        Ok(Self::new(VirtualFs::from_entries(&entries)).with_tree_marker(&config.tree_marker))
    }

    pub fn with_tree_marker(mut self, marker: &str) -> Self {
        self.tree_marker = marker.to_string();
        self
    }

    pub fn current_dir(&self) -> &str {
        &self.cur_dir
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Run one input line and return the text to display
    pub fn process(&mut self, line: &str) -> String {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(String::new()),
        });

        match result {
            Ok(output) => output,
            Err(e) => {
                if !e.is_recoverable() {
                    log::error!("Unexpected failure while running '{line}': {e}");
                }
                format!("{e}\n")
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<String> {
        log::debug!("Executing '{}' in {}", command.name(), self.cur_dir);

        match command {
            Command::Ls { path } => execute_ls(&self.fs, &self.cur_dir, path.as_deref()),
            Command::Cd { path: None } => Ok(String::new()),
            Command::Cd { path: Some(path) } => {
                self.cur_dir = execute_cd(&self.fs, &self.cur_dir, &path)?;
                Ok(String::new())
            }
            Command::Cp { source, target } => {
                execute_cp(&mut self.fs, &self.cur_dir, &source, &target)?;
                Ok(String::new())
            }
            Command::Tree { path } => {
                execute_tree(&self.fs, &self.cur_dir, path.as_deref(), &self.tree_marker)
            }
            Command::Uptime => Ok(execute_uptime(self.started_at)),
            Command::Exit => {
                self.exit_requested = true;
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::archive::ArchiveEntry;

    fn session() -> Session {
        Session::new(VirtualFs::from_entries(&[
            ArchiveEntry::directory("docs"),
            ArchiveEntry::file("docs/readme.txt"),
            ArchiveEntry::directory("backup"),
        ]))
    }

    #[test]
    fn test_starts_at_root() {
        let session = session();
        assert_eq!(session.current_dir(), "~");
        assert!(!session.exit_requested());
    }

    #[test]
    fn test_blank_line() {
        let mut session = session();
        assert_eq!(session.process(""), "");
        assert_eq!(session.process("   "), "");
        assert_eq!(session.current_dir(), "~");
    }

    #[test]
    fn test_cd_changes_directory_only_on_success() {
        let mut session = session();
        assert_eq!(session.process("cd docs"), "");
        assert_eq!(session.current_dir(), "~/docs");

        assert_eq!(
            session.process("cd missing"),
            "There is no directory with name 'missing'\n"
        );
        assert_eq!(session.current_dir(), "~/docs");

        assert_eq!(session.process("cd"), "");
        assert_eq!(session.current_dir(), "~/docs");
    }

    #[test]
    fn test_errors_are_rendered_with_newline() {
        let mut session = session();
        assert_eq!(session.process("pwd"), "Command \"pwd\" is not found\n");
        assert_eq!(
            session.process("cp docs"),
            "Command 'cp' must have two arguments.\n"
        );
    }

    #[test]
    fn test_exit_sets_flag() {
        let mut session = session();
        assert_eq!(session.process("exit"), "");
        assert!(session.exit_requested());
    }

    #[test]
    fn test_tree_uses_configured_marker() {
        let mut session = session().with_tree_marker("--");
        assert_eq!(session.process("tree docs"), "docs\n--readme.txt\n");
    }

    #[test]
    fn test_uptime_output() {
        let mut session = session();
        let output = session.process("uptime");
        assert!(output.ends_with(" up 0 sec\n"));
    }
}
