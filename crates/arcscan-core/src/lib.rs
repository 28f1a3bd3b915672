//! arcscan - find archives that were never extracted
//!
//! This library walks a directory tree, matches archives against the files
//! and folders sharing their base name, reports archives that look
//! unextracted, and extracts them on request.

pub mod archive;
pub mod config;
pub mod driver;
pub mod error;
pub mod reconcile;
pub mod report;
pub mod scan;

pub use error::{Error, Result};

// Re-export commonly used types
pub use archive::{
    extract_all, extract_archive, ArchiveFormat, BatchSummary, ExtractOutcome, Failure,
};
pub use driver::{
    Confirm, Driver, FixedConfirm, OutputFormat, Question, ReportTarget, RunSummary,
};
pub use reconcile::{reconcile, ScanReport};
pub use report::{load_report, render_report, save_report, to_json_string};
pub use scan::{base_name, is_archive_name, scan_directory, NameIndex, ScanIndex, ScanOptions};
