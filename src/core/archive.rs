//! Reading the member list of a tar archive.
//!
//! This module turns an archive on disk into a flat list of [`ArchiveEntry`]
//! values. Nothing but the member headers is consulted: file contents are
//! never read.
//!
//! # Public API
//! - [`ArchiveEntry`]: One member path tagged as directory or file
//! - [`EntryKind`]: The two member kinds the shell understands
//! - [`read_archive`]: Enumerate the members of a plain, gzip, bzip2 or xz
//!   compressed tar file
//!
//! # Normalisation
//! Member paths are stored relative to the archive root without a trailing
//! `/` or a leading `./`. Members that are neither directories nor regular
//! files (symlinks, devices, fifos) are skipped.

use crate::core::error::{Result, TarShellError};
use bzip2_rs::DecoderReader as BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use tar::Archive;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const BZIP2_MAGIC: &[u8] = b"BZh";
const XZ_MAGIC: &[u8] = &[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
}

impl Compression {
    fn detect(header: &[u8]) -> Self {
        if header.starts_with(GZIP_MAGIC) {
            Self::Gzip
        } else if header.starts_with(BZIP2_MAGIC) {
            Self::Bzip2
        } else if header.starts_with(XZ_MAGIC) {
            Self::Xz
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl ArchiveEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }
}

/// Enumerate the members of the archive at `path`
///
/// Plain tarballs and gzip, bzip2 or xz compressed ones are accepted;
/// compression is detected from the leading magic bytes rather than the file
/// extension.
///
/// # Errors
/// * [`TarShellError::ArchiveNotFound`] - `path` does not exist
/// * [`TarShellError::ArchiveInvalid`] - the file is empty or not a tar archive
pub fn read_archive(path: &Path) -> Result<Vec<ArchiveEntry>> {
    if !path.exists() {
        return Err(TarShellError::archive_not_found(path));
    }

    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(TarShellError::archive_invalid(path, "empty file"));
    }

    let mut header = Vec::with_capacity(XZ_MAGIC.len());
    file.take(XZ_MAGIC.len() as u64).read_to_end(&mut header)?;
    let compression = Compression::detect(&header);
    // Reopen instead of seeking so the tar reader starts from byte zero
    let mut file = BufReader::new(File::open(path)?);

    let reader: Box<dyn Read> = match compression {
        Compression::None => Box::new(file),
        Compression::Gzip => Box::new(GzDecoder::new(file)),
        Compression::Bzip2 => Box::new(BzDecoder::new(file)),
        Compression::Xz => {
            let mut decompressed = Vec::new();
            lzma_rs::xz_decompress(&mut file, &mut decompressed).map_err(|e| {
                log::warn!("Rejecting archive {}: {e}", path.display());
                TarShellError::archive_invalid(path, e.to_string())
            })?;
            Box::new(Cursor::new(decompressed))
        }
    };
    if compression != Compression::None {
        log::debug!("Archive {} is {compression:?}-compressed", path.display());
    }

    collect_entries(reader).map_err(|e| {
        log::warn!("Rejecting archive {}: {e}", path.display());
        TarShellError::archive_invalid(path, e.to_string())
    })
}

fn collect_entries<R: Read>(reader: R) -> std::io::Result<Vec<ArchiveEntry>> {
    let mut archive = Archive::new(reader);
    let mut entries = Vec::new();

    for entry in archive.entries()? {
        let entry = entry?;
        let entry_type = entry.header().entry_type();
        let kind = if entry_type.is_dir() {
            EntryKind::Directory
        } else if entry_type.is_file() {
            EntryKind::File
        } else {
            log::debug!("Skipping unsupported member type {entry_type:?}");
            continue;
        };

        let raw = entry.path()?.to_string_lossy().into_owned();
        match normalize_member_path(&raw) {
            Some(path) => entries.push(ArchiveEntry { path, kind }),
            None => log::debug!("Skipping archive root member '{raw}'"),
        }
    }

    log::debug!("Read {} archive members", entries.len());
    Ok(entries)
}

/// Strip a leading `./` and trailing `/`; `None` for the archive root itself
fn normalize_member_path(raw: &str) -> Option<String> {
    let path = raw.strip_prefix("./").unwrap_or(raw).trim_end_matches('/');
    if path.is_empty() || path == "." {
        None
    } else {
        Some(path.to_string())
    }
}
