use crate::core::{
    error::{Result, TarShellError},
    path_resolver::PathResolver,
    vfs::VirtualFs,
};

/// List the children of `path` (or of `cwd`) space-separated, in stored order
pub fn execute_ls(fs: &VirtualFs, cwd: &str, path: Option<&str>) -> Result<String> {
    let dir = match path {
        None => cwd.to_string(),
        Some(raw) => PathResolver::new(fs, cwd)
            .resolve_directory(raw)
            .ok_or_else(|| TarShellError::no_such_directory(raw))?,
    };

    let children = fs.children(&dir).unwrap_or_default();
    Ok(format!("{}\n", children.join(" ")))
}
