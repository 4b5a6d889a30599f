//! In-memory directory tree built from an archive member list.
//!
//! [`VirtualFs`] holds the Directory Tree (canonical directory path to its
//! ordered child names) and the File Set (canonical file paths). Canonical
//! paths are flat strings rooted at `~`, e.g. `~/docs/readme.txt`.
//!
//! # Public API
//! - [`VirtualFs`]: The tree, its index builder and its mutation primitives
//! - [`ROOT`]: The canonical root path `~`
//! - [`leaf_name`], [`parent_path`]: String-level path helpers
//!
//! # Invariants
//! - `~` is always a directory
//! - No path is both a directory and a file
//! - Entries are only ever added, never removed or renamed

use crate::core::archive::{ArchiveEntry, EntryKind};
use std::collections::{HashMap, HashSet};

pub const ROOT: &str = "~";

type DirId = usize;

#[derive(Debug, Clone)]
struct DirNode {
    path: String,
    children: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct VirtualFs {
    nodes: Vec<DirNode>,
    dir_index: HashMap<String, DirId>,
    files: HashSet<String>,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFs {
    /// An empty tree containing only `~`
    pub fn new() -> Self {
        let mut fs = Self {
            nodes: Vec::new(),
            dir_index: HashMap::new(),
            files: HashSet::new(),
        };
        fs.insert_dir(ROOT.to_string());
        fs
    }

    /// Build the tree from archive members
    ///
    /// The first pass registers every directory and file so lookups work
    /// regardless of member order. The second pass links each member into its
    /// parent's listing in archive order. A member whose parent directory was
    /// never registered stays addressable but is left out of every listing.
    /// When a path appears as both a file and a directory, the first member
    /// wins and the later one is ignored in both passes.
    pub fn from_entries(entries: &[ArchiveEntry]) -> Self {
        let mut fs = Self::new();

        for entry in entries {
            let path = canonical(&entry.path);
            match entry.kind {
                EntryKind::Directory => {
                    if !fs.files.contains(&path) {
                        fs.insert_dir(path);
                    }
                }
                EntryKind::File => {
                    if !fs.is_dir(&path) {
                        fs.files.insert(path);
                    }
                }
            }
        }

        for entry in entries {
            let path = canonical(&entry.path);
            let registered = match entry.kind {
                EntryKind::Directory => fs.is_dir(&path),
                EntryKind::File => fs.is_file(&path),
            };
            if !registered {
                log::warn!("'{path}' is listed as both a file and a directory; keeping the first");
                continue;
            }
            let parent = parent_path(&path);
            match fs.dir_index.get(parent) {
                Some(&id) => fs.nodes[id].children.push(leaf_name(&path).to_string()),
                None => log::warn!("Parent directory of '{path}' is not in the archive; leaving it out of listings"),
            }
        }

        log::debug!(
            "Built tree with {} directories and {} files",
            fs.dir_count(),
            fs.file_count()
        );
        fs
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.dir_index.contains_key(path)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// Child names of a directory in insertion order
    pub fn children(&self, path: &str) -> Option<&[String]> {
        self.dir_index
            .get(path)
            .map(|&id| self.nodes[id].children.as_slice())
    }

    pub fn dir_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Canonical paths of all directories, in creation order
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|node| node.path.as_str())
    }

    /// Canonical paths of all files, in no particular order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Register `<dir>/<name>` as a file and list it in `dir`
    ///
    /// Returns `false` without touching the tree when `dir` is not a
    /// directory or already lists `name`. Callers rely on this silent skip:
    /// copying onto an existing name is a no-op, not an error.
    pub fn add_file(&mut self, dir: &str, name: &str) -> bool {
        let Some(&id) = self.dir_index.get(dir) else {
            return false;
        };
        if self.nodes[id].children.iter().any(|child| child == name) {
            return false;
        }
        self.nodes[id].children.push(name.to_string());
        self.files.insert(join(dir, name));
        true
    }

    /// Recursively copy directory `src` into directory `dst`
    ///
    /// Creates `<dst>/<leaf of src>` and duplicates the names below it. When
    /// that directory already exists the copy is merged into it, skipping
    /// names that are already listed. Callers must reject `dst` lying inside
    /// `src`.
    pub fn copy_dir_into(&mut self, src: &str, dst: &str) {
        let Some(&dst_id) = self.dir_index.get(dst) else {
            return;
        };
        let name = leaf_name(src);
        let new_dir = join(dst, name);
        if self.files.contains(&new_dir) {
            log::debug!("Skipping copy of '{src}': '{new_dir}' is a file");
            return;
        }
        if !self.nodes[dst_id].children.iter().any(|child| child == name) {
            self.nodes[dst_id].children.push(name.to_string());
        }
        self.insert_dir(new_dir.clone());
        log::debug!("Copying directory '{src}' to '{new_dir}'");

        let children = self.children(src).map(<[String]>::to_vec).unwrap_or_default();
        for child in children {
            let child_path = join(src, &child);
            if self.files.contains(&child_path) {
                self.add_file(&new_dir, &child);
            } else {
                self.copy_dir_into(&child_path, &new_dir);
            }
        }
    }

    fn insert_dir(&mut self, path: String) -> DirId {
        if let Some(&id) = self.dir_index.get(&path) {
            return id;
        }
        let id = self.nodes.len();
        self.dir_index.insert(path.clone(), id);
        self.nodes.push(DirNode {
            path,
            children: Vec::new(),
        });
        id
    }
}

/// Last `/`-separated segment of a path
pub fn leaf_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, leaf)| leaf)
}

/// Path with its last segment removed; empty for a single-segment path
pub fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

fn canonical(archive_path: &str) -> String {
    join(ROOT, archive_path)
}

fn join(dir: &str, name: &str) -> String {
    format!("{dir}/{name}")
}
