use crate::core::{
    error::{Result, TarShellError},
    path_resolver::PathResolver,
    vfs::VirtualFs,
};

/// Resolve the new current directory for `cd <path>`
///
/// Returns the canonical path; the caller only updates its state on success.
pub fn execute_cd(fs: &VirtualFs, cwd: &str, path: &str) -> Result<String> {
    PathResolver::new(fs, cwd)
        .resolve_directory(path)
        .ok_or_else(|| TarShellError::no_such_directory(path))
}
