//! Single-file gzip extractor implementation

use super::extractor::Extractor;
use crate::{Error, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Gzip extractor for plain `.gz` files (not tarballs)
pub struct GzipExtractor;

impl Default for GzipExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl GzipExtractor {
    /// Create a new gzip extractor
    pub fn new() -> Self {
        Self
    }

    /// Path of the decompressed file: the archive name without `.gz`, inside `destination`
    pub fn output_path(source: &Path, destination: &Path) -> Result<PathBuf> {
        let name = source.file_name().ok_or_else(|| {
            Error::InvalidPath(format!("{} has no file name", source.display()))
        })?;
        let stem = source
            .file_stem()
            .filter(|stem| *stem != name)
            .ok_or_else(|| {
                Error::InvalidPath(format!(
                    "{} has no name left after removing .gz",
                    source.display()
                ))
            })?;
        Ok(destination.join(stem))
    }
}

impl Extractor for GzipExtractor {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let output_path = Self::output_path(source, destination)?;
        debug!("Decompressing {:?} to {:?}", source, output_path);

        let mut decoder = MultiGzDecoder::new(BufReader::new(File::open(source)?));
        let mut output = File::create(&output_path)?;
        io::copy(&mut decoder, &mut output)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "gz"
    }
}
