//! `cp SOURCE TARGET` over the in-memory tree.
//!
//! Both arguments are classified by trying directory and file resolution.
//! Only names are copied; there is no file content to duplicate.
//!
//! # Cases
//! - **File into directory**: added under its own name unless the directory
//!   already lists that name, in which case nothing happens
//! - **File onto existing file**: silently ignored, overwriting is not supported
//! - **File to new name**: created when the target's parent directory exists
//! - **Directory into directory**: recursive copy, refused when the target
//!   path starts with the source path
//! - **Directory onto file**: error

use crate::core::{
    error::{Result, TarShellError},
    path_resolver::PathResolver,
    vfs::{leaf_name, VirtualFs},
};

pub fn execute_cp(fs: &mut VirtualFs, cwd: &str, source: &str, target: &str) -> Result<()> {
    let resolver = PathResolver::new(fs, cwd);
    let source_file = resolver.resolve_file(source);
    let source_dir = resolver.resolve_directory(source);
    let target_file = resolver.resolve_file(target);
    let target_dir = resolver.resolve_directory(target);

    if let Some(source_file) = source_file {
        let name = leaf_name(&source_file);

        if let Some(target_dir) = target_dir {
            if !fs.add_file(&target_dir, name) {
                log::debug!("cp: '{target_dir}' already lists '{name}', skipping");
            }
            return Ok(());
        }

        if target_file.is_some() {
            log::debug!("cp: '{target}' already exists, overwrite is not supported");
            return Ok(());
        }

        let new_name = leaf_name(target);
        if matches!(new_name, "" | "." | "..") {
            return Err(TarShellError::no_such_file_or_directory(target));
        }
        // Only a name without any `/` lands in the current directory
        let parent = match target.rsplit_once('/') {
            None => Some(cwd.to_string()),
            Some(("", _)) => None,
            Some((raw_parent, _)) => resolver.resolve_directory(raw_parent),
        };
        let parent = parent.ok_or_else(|| TarShellError::no_such_file_or_directory(target))?;
        fs.add_file(&parent, new_name);
        return Ok(());
    }

    if let Some(source_dir) = source_dir {
        if target_file.is_some() {
            return Err(TarShellError::not_a_directory(leaf_name(target)));
        }
        let target_dir =
            target_dir.ok_or_else(|| TarShellError::no_such_file_or_directory(target))?;

        if target_dir.starts_with(&source_dir) {
            return Err(TarShellError::CopyIntoItself);
        }
        fs.copy_dir_into(&source_dir, &target_dir);
        return Ok(());
    }

    Err(TarShellError::no_such_file_or_directory(source))
}
