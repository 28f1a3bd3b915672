//! Batch extraction over a set of archives

use super::{extract_archive, ExtractOutcome};
use crate::scan::NameIndex;
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// An archive that could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub archive: PathBuf,
    pub message: String,
}

/// Tally of a batch extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub unsupported: usize,
    pub failures: Vec<Failure>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed + self.unsupported
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// `Err(PartialFailure)` when any archive failed
    pub fn ensure_success(&self) -> Result<()> {
        if self.has_failures() {
            return Err(Error::PartialFailure {
                failed: self.failed,
                total: self.total(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extraction summary:")?;
        writeln!(f, "  succeeded:   {}", self.succeeded)?;
        writeln!(f, "  failed:      {}", self.failed)?;
        if self.unsupported > 0 {
            writeln!(f, "  unsupported: {}", self.unsupported)?;
        }
        for failure in &self.failures {
            writeln!(
                f,
                "  ! {}: {}",
                failure.archive.display(),
                failure.message
            )?;
        }
        Ok(())
    }
}

/// Extract every archive in `archives` into its default destination.
///
/// Archives are processed one at a time in index order. A failing archive is
/// recorded and never stops the rest of the batch.
pub fn extract_all(archives: &NameIndex) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for archive in archives.paths() {
        match extract_archive(archive, None) {
            Ok(ExtractOutcome::Extracted { destination, .. }) => {
                info!("Extracted {:?} into {:?}", archive, destination);
                summary.succeeded += 1;
            }
            Ok(ExtractOutcome::Unsupported { .. }) => {
                summary.unsupported += 1;
            }
            Err(e) => {
                warn!("Failed to extract {:?}: {}", archive, e);
                summary.failed += 1;
                summary.failures.push(Failure {
                    archive: archive.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        "Batch extraction finished: {} succeeded, {} failed",
        summary.succeeded, summary.failed
    );

    summary
}
