//! Resolution of user-typed paths against the current directory.
//!
//! [`PathResolver`] turns expressions like `docs`, `./docs/`, `..` or
//! `~/docs/readme.txt` into canonical paths and checks them against the tree.
//!
//! # Rules
//! Applied in order, all on the raw string:
//! 1. Directory lookups only: a path ending in `/` is rebuilt from its
//!    non-empty segments (`docs//sub/` becomes `docs/sub`)
//! 2. A leading `..` is replaced by the parent of the current directory
//! 3. Otherwise a leading `.` is replaced by the current directory
//! 4. A result not starting with `~` is prefixed with `<current directory>/`
//!
//! Only one leading `..` is substituted: `../..` is not walked up twice and
//! simply fails to resolve. This is the shell's documented behavior.

use crate::core::vfs::{parent_path, VirtualFs};

pub struct PathResolver<'a> {
    fs: &'a VirtualFs,
    cwd: &'a str,
}

impl<'a> PathResolver<'a> {
    pub fn new(fs: &'a VirtualFs, cwd: &'a str) -> Self {
        Self { fs, cwd }
    }

    /// Canonical path of `raw` if it names an existing directory
    pub fn resolve_directory(&self, raw: &str) -> Option<String> {
        let path = self.normalize(raw, true);
        let found = self.fs.is_dir(&path);
        log::debug!("resolve_directory: '{raw}' -> '{path}' ({found})");
        found.then_some(path)
    }

    /// Canonical path of `raw` if it names an existing file
    pub fn resolve_file(&self, raw: &str) -> Option<String> {
        let path = self.normalize(raw, false);
        let found = self.fs.is_file(&path);
        log::debug!("resolve_file: '{raw}' -> '{path}' ({found})");
        found.then_some(path)
    }

    fn normalize(&self, raw: &str, collapse_separators: bool) -> String {
        let mut path = raw.to_string();

        if collapse_separators && path.ends_with('/') {
            path = path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .collect::<Vec<_>>()
                .join("/");
        }

        if path.starts_with("..") {
            path = path.replacen("..", parent_path(self.cwd), 1);
        } else if path.starts_with('.') {
            path = path.replacen('.', self.cwd, 1);
        }

        if !path.starts_with('~') {
            path = format!("{}/{}", self.cwd, path);
        }
        path
    }
}
