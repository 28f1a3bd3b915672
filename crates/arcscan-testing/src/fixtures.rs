//! Archive fixtures built with the real format crates

use crate::TestDir;
use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Entries used by the archive builders: (path inside archive, content)
pub const SAMPLE_ENTRIES: &[(&str, &[u8])] = &[
    ("readme.txt", b"read me first"),
    ("docs/guide.md", b"# Guide"),
    ("docs/img/logo.bin", &[0x89, 0x50, 0x4e, 0x47]),
];

/// Writes a zip archive containing `entries`
pub fn create_zip(test_dir: &TestDir, name: &str, entries: &[(&str, &[u8])]) -> Result<PathBuf> {
    let path = test_dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = zip::ZipWriter::new(File::create(&path)?);
    for (entry, content) in entries {
        writer.start_file(*entry, SimpleFileOptions::default())?;
        writer.write_all(content)?;
    }
    writer.finish()?;
    Ok(path)
}

fn tar_bytes(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let mut builder = tar::Builder::new(Vec::new());
    for (entry, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_path(entry)?;
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, *content)?;
    }
    Ok(builder.into_inner()?)
}

fn gzip_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Writes an uncompressed tar archive containing `entries`
pub fn create_tar(test_dir: &TestDir, name: &str, entries: &[(&str, &[u8])]) -> Result<PathBuf> {
    test_dir.create_file(name, &tar_bytes(entries)?)
}

/// Writes a gzip-compressed tar archive containing `entries`
pub fn create_tar_gz(
    test_dir: &TestDir,
    name: &str,
    entries: &[(&str, &[u8])],
) -> Result<PathBuf> {
    test_dir.create_file(name, &gzip_bytes(&tar_bytes(entries)?)?)
}

/// Writes a single gzip-compressed file
pub fn create_gz(test_dir: &TestDir, name: &str, content: &[u8]) -> Result<PathBuf> {
    test_dir.create_file(name, &gzip_bytes(content)?)
}

/// Writes a 7z archive containing `entries`
pub fn create_7z(test_dir: &TestDir, name: &str, entries: &[(&str, &[u8])]) -> Result<PathBuf> {
    let staging = TempDir::new()?;
    for (entry, content) in entries {
        let path = staging.path().join(entry);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    }

    let path = test_dir.join(name);
    sevenz_rust::compress_to_path(staging.path(), &path)?;
    Ok(path)
}

/// Writes a file with an archive suffix whose content is not an archive
pub fn create_corrupt(test_dir: &TestDir, name: &str) -> Result<PathBuf> {
    test_dir.create_file(name, b"this is not an archive at all")
}

/// Creates a download folder with a mix of pending, extracted and plain entries
///
/// ```text
/// movies.zip            pending
/// photos.zip + photos/  already extracted
/// backup.tar.gz         pending
/// notes.txt             no archive
/// music/song.mp3        no archive (both "music" and "song")
/// ```
pub fn create_download_tree(test_dir: &TestDir) -> Result<()> {
    create_zip(test_dir, "movies.zip", SAMPLE_ENTRIES)?;
    create_zip(test_dir, "photos.zip", SAMPLE_ENTRIES)?;
    test_dir.create_file("photos/readme.txt", b"read me first")?;
    create_tar_gz(test_dir, "backup.tar.gz", SAMPLE_ENTRIES)?;
    test_dir.create_file("notes.txt", b"remember the milk")?;
    test_dir.create_file("music/song.mp3", &[0xff, 0xfb])?;
    Ok(())
}
