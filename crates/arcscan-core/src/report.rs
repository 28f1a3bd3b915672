//! Human-readable rendering and JSON persistence of scan results

use crate::reconcile::ScanReport;
use crate::scan::NameIndex;
use crate::{Error, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of the default report file name
pub const REPORT_PREFIX: &str = "compression_check_results_";

/// `compression_check_results_<YYYYMMDD_HHMMSS>.json` for the given time
pub fn default_report_name(now: DateTime<Local>) -> String {
    format!("{}{}.json", REPORT_PREFIX, now.format("%Y%m%d_%H%M%S"))
}

fn render_section(out: &mut String, title: &str, index: &NameIndex, empty: &str) {
    let _ = writeln!(out, "\n{}", title);
    if index.is_empty() {
        let _ = writeln!(out, "  {}", empty);
        return;
    }
    for (name, paths) in index {
        let _ = writeln!(out, "\n  Name: {}", name);
        for path in paths {
            let _ = writeln!(out, "    at: {}", path.display());
        }
    }
}

/// Render the report grouped by base name
pub fn render_report(report: &ScanReport) -> String {
    let mut out = String::new();
    out.push_str("=== Check results ===\n");
    render_section(
        &mut out,
        "1. Unextracted archives:",
        &report.not_extracted,
        "All archives have been extracted",
    );
    render_section(
        &mut out,
        "2. Names without a matching archive:",
        &report.no_archive,
        "Every file has a matching archive",
    );
    out
}

/// Serialize the report as UTF-8 JSON with 4-space indentation
pub fn to_json_string(report: &ScanReport) -> Result<String> {
    let mut buf = Vec::new();
    write_json(report, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Other(e.to_string()))
}

fn write_json<W: Write>(report: &ScanReport, writer: W) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    report.serialize(&mut serializer)?;
    Ok(())
}

/// Write the report to `output`, or to a timestamped file in the current directory.
///
/// Returns the path that was written.
pub fn save_report(report: &ScanReport, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_report_name(Local::now())),
    };
    save_report_to(report, &path)?;
    Ok(path)
}

/// Write the report into `dir` under the timestamped default name
pub fn save_report_in(report: &ScanReport, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(default_report_name(Local::now()));
    save_report_to(report, &path)?;
    Ok(path)
}

fn save_report_to(report: &ScanReport, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(report, &mut writer)?;
    writer.flush()?;
    info!("Results saved to: {:?}", path);
    Ok(())
}

/// Read a report previously written by [`save_report`]
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<ScanReport> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
