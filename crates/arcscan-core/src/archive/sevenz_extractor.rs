//! 7z extractor implementation

use super::extractor::Extractor;
use crate::Result;
use std::path::Path;
use tracing::debug;

/// 7z extractor
pub struct SevenZExtractor;

impl Default for SevenZExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SevenZExtractor {
    /// Create a new 7z extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for SevenZExtractor {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        debug!("Decompressing 7z archive {:?}", source);
        sevenz_rust::decompress_file(source, destination)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "7z"
    }
}
