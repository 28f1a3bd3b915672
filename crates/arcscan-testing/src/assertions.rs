//! Common assertions for arcscan testing

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Relative paths of every regular file below `dir`
pub fn collect_files(dir: &Path) -> Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.insert(entry.path().strip_prefix(dir)?.to_path_buf());
        }
    }
    Ok(files)
}

/// Asserts that `dir` holds exactly `entries`, with matching content
pub fn assert_extracted(dir: &Path, entries: &[(&str, &[u8])]) -> Result<()> {
    let found = collect_files(dir)?;
    let expected: BTreeSet<PathBuf> = entries.iter().map(|(name, _)| PathBuf::from(name)).collect();

    assert_eq!(found, expected, "Different entry set in {:?}", dir);

    for (name, content) in entries {
        let actual = std::fs::read(dir.join(name))?;
        assert_eq!(&actual[..], *content, "Content mismatch for {:?}", name);
    }

    Ok(())
}
