//! Rar extractor implementation

use super::extractor::Extractor;
use crate::Result;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, warn};
use unrar::Archive;

/// Rar extractor
pub struct RarExtractor;

impl Default for RarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RarExtractor {
    /// Create a new rar extractor
    pub fn new() -> Self {
        Self
    }
}

/// Entry names that stay inside the destination
fn is_enclosed(name: &Path) -> bool {
    name.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl Extractor for RarExtractor {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let mut archive = Archive::new(source).open_for_processing()?;

        while let Some(header) = archive.read_header()? {
            let filename = header.entry().filename.clone();

            if !is_enclosed(&filename) {
                warn!("Skipping rar entry outside destination: {:?}", filename);
                archive = header.skip()?;
                continue;
            }

            let target = destination.join(&filename);
            archive = if header.entry().is_file() {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                debug!("Extracting: {:?}", filename);
                header.extract_to(&target)?
            } else {
                if header.entry().is_directory() {
                    fs::create_dir_all(&target)?;
                }
                header.skip()?
            };
        }

        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "rar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_enclosed_names() {
        assert!(is_enclosed(Path::new("a/b.txt")));
        assert!(is_enclosed(Path::new("./a")));
        assert!(!is_enclosed(Path::new("../escape.txt")));
        assert!(!is_enclosed(Path::new("/etc/passwd")));
    }

    #[test]
    fn test_invalid_rar_fails() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("test.rar");
        fs::write(&archive_path, b"Rar! but not really").unwrap();

        let result = RarExtractor::new().extract(&archive_path, temp_dir.path());
        assert!(matches!(result, Err(crate::Error::Rar(_))));
    }
}
