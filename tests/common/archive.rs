//! Fixture archives built with the `tar` crate
//!
//! Each fixture is written to a temporary file that lives as long as the
//! returned [`TestArchive`].

#![allow(dead_code)]

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::Path;
use tar::{Builder, EntryType, Header};
use tempfile::NamedTempFile;

/// Temporary archive file. Keep it alive for the duration of the test.
pub struct TestArchive {
    pub file: NamedTempFile,
}

impl TestArchive {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Members are given as paths; a trailing `/` marks a directory
pub fn tar_bytes(members: &[&str]) -> anyhow::Result<Vec<u8>> {
    let mut builder = Builder::new(Vec::new());

    for member in members {
        let mut header = Header::new_gnu();
        if member.ends_with('/') {
            header.set_entry_type(EntryType::Directory);
            header.set_mode(0o755);
            header.set_size(0);
            builder.append_data(&mut header, member, std::io::empty())?;
        } else {
            let content = format!("contents of {member}\n");
            header.set_entry_type(EntryType::Regular);
            header.set_mode(0o644);
            header.set_size(content.len() as u64);
            builder.append_data(&mut header, member, content.as_bytes())?;
        }
    }

    Ok(builder.into_inner()?)
}

pub fn create_archive(members: &[&str]) -> anyhow::Result<TestArchive> {
    let mut file = NamedTempFile::new()?;
    file.write_all(&tar_bytes(members)?)?;
    file.flush()?;
    Ok(TestArchive { file })
}

pub fn create_gzip_archive(members: &[&str]) -> anyhow::Result<TestArchive> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&tar_bytes(members)?)?;
    let mut file = NamedTempFile::new()?;
    file.write_all(&encoder.finish()?)?;
    file.flush()?;
    Ok(TestArchive { file })
}

pub fn create_file_with(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Scenario: `docs/readme.txt`, `docs/sub/deep.txt` and an empty `backup/`
pub fn create_docs_archive() -> anyhow::Result<TestArchive> {
    create_archive(&[
        "docs/",
        "docs/readme.txt",
        "docs/sub/",
        "docs/sub/deep.txt",
        "backup/",
    ])
}
