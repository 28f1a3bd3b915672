//! Zip extractor implementation

use super::extractor::Extractor;
use crate::Result;
use std::fs::File;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Zip extractor
pub struct ZipExtractor;

impl Default for ZipExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipExtractor {
    /// Create a new zip extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for ZipExtractor {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let file = File::open(source)?;
        let mut archive = ZipArchive::new(file)?;

        debug!("Zip archive {:?} has {} entries", source, archive.len());

        // entries with unsafe names are rejected by the zip crate
        archive.extract(destination)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "zip"
    }
}
