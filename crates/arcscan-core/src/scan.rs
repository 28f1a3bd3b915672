//! Directory walking and base-name indexing
//!
//! Every entry below the scan root is reduced to a *base name* (its file name
//! with all extensions stripped, stopping at a bare `.tar`) and recorded in a
//! [`NameIndex`]. Archives are additionally recorded in a second index so the
//! reconciler can compare the two.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File name suffixes recognized as archives (matched case-insensitively)
pub const ARCHIVE_SUFFIXES: &[&str] = &[
    ".zip", ".tar.gz", ".tgz", ".tar.bz2", ".tbz2", ".tar.xz", ".txz", ".gz", ".rar", ".7z",
];

/// Base name → paths, in the order the walker encountered them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameIndex {
    entries: BTreeMap<String, Vec<PathBuf>>,
}

impl NameIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path under the given base name
    pub fn insert(&mut self, base_name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries
            .entry(base_name.into())
            .or_default()
            .push(path.into());
    }

    /// Paths recorded for a base name
    pub fn get(&self, base_name: &str) -> Option<&[PathBuf]> {
        self.entries.get(base_name).map(Vec::as_slice)
    }

    /// Number of paths recorded for a base name (0 when absent)
    pub fn count(&self, base_name: &str) -> usize {
        self.entries.get(base_name).map_or(0, Vec::len)
    }

    pub fn contains(&self, base_name: &str) -> bool {
        self.entries.contains_key(base_name)
    }

    /// Number of distinct base names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of paths across all base names
    pub fn path_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate over base names and their paths, sorted by base name
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<PathBuf>> {
        self.entries.iter()
    }

    /// Iterate over every recorded path
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().flatten().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a NameIndex {
    type Item = (&'a String, &'a Vec<PathBuf>);
    type IntoIter = btree_map::Iter<'a, String, Vec<PathBuf>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, PathBuf)> for NameIndex {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        let mut index = NameIndex::new();
        for (name, path) in iter {
            index.insert(name, path);
        }
        index
    }
}

/// Result of walking a directory tree
#[derive(Debug, Clone, Default)]
pub struct ScanIndex {
    /// Entries whose file name carries an archive suffix
    pub archives: NameIndex,
    /// Every entry below the root, archives included
    pub all: NameIndex,
}

/// Options for [`scan_directory_with`]
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

/// Split a file name into (stem, extension), leading dots never start an extension.
///
/// The returned extension includes its dot and is empty when there is none.
fn split_extension(name: &str) -> (&str, &str) {
    let first_non_dot = match name.find(|c| c != '.') {
        Some(i) => i,
        None => return (name, ""),
    };
    match name.rfind('.') {
        Some(dot) if dot > first_non_dot => name.split_at(dot),
        _ => (name, ""),
    }
}

/// Strip every extension from a file name, stopping once a `.tar` is removed.
///
/// `archive.tar.gz` → `archive`, `data.tar` → `data`, `report.pdf` → `report`.
/// The `.tar` match is exact, so `DATA.TAR.GZ` strips down to `DATA`.
pub fn base_name(file_name: &str) -> &str {
    let mut name = file_name;
    loop {
        let (stem, ext) = split_extension(name);
        name = stem;
        if ext.is_empty() || ext == ".tar" {
            return name;
        }
    }
}

/// Whether a file name carries one of the [`ARCHIVE_SUFFIXES`]
pub fn is_archive_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ARCHIVE_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

/// Walk `root` and index every entry by base name
pub fn scan_directory<P: AsRef<Path>>(root: P) -> Result<ScanIndex> {
    scan_directory_with(root, &ScanOptions::default())
}

/// Walk `root` with options and index every entry by base name
pub fn scan_directory_with<P: AsRef<Path>>(root: P, options: &ScanOptions) -> Result<ScanIndex> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    info!("Scanning directory: {:?}", root);

    let mut index = ScanIndex::default();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_links)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy();
        let name = base_name(&file_name).to_string();
        let path = entry.path().to_path_buf();

        // symlinked archives count even when links are not followed
        if entry.path().is_file() && is_archive_name(&file_name) {
            debug!("Found archive {:?} (base name {:?})", path, name);
            index.archives.insert(name.clone(), path.clone());
        }
        index.all.insert(name, path);
    }

    info!(
        "Scan complete: {} archives, {} entries, {} distinct names",
        index.archives.path_count(),
        index.all.path_count(),
        index.all.len()
    );

    Ok(index)
}
