//! Extractor trait for archive operations

use crate::Result;
use std::path::Path;

/// Trait for archive extractors
pub trait Extractor: Send + Sync {
    /// Extract the whole archive at `source` into the `destination` directory.
    ///
    /// The destination already exists when this is called.
    fn extract(&self, source: &Path, destination: &Path) -> Result<()>;

    /// Get the format name for this extractor
    fn format_name(&self) -> &'static str;
}
