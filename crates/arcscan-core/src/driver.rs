//! End-to-end check: scan, reconcile, report, then optionally save and extract

use crate::archive::{extract_all, BatchSummary};
use crate::reconcile::{reconcile, ScanReport};
use crate::report::{render_report, save_report, save_report_in, to_json_string};
use crate::scan::{scan_directory_with, ScanOptions};
use crate::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// The yes/no questions asked during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Save the results to a JSON file?
    SaveResults,
    /// Extract the archives flagged as not extracted?
    ExtractArchives,
}

impl Question {
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::SaveResults => "Save the results to a file?",
            Question::ExtractArchives => "Extract the unextracted archives?",
        }
    }
}

/// Source of answers to [`Question`]s
pub trait Confirm {
    fn confirm(&mut self, question: Question) -> Result<bool>;
}

/// Non-interactive confirmer with fixed answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConfirm {
    save: bool,
    extract: bool,
}

impl FixedConfirm {
    /// Answer yes to everything
    pub fn yes() -> Self {
        Self::answers(true, true)
    }

    /// Answer no to everything
    pub fn no() -> Self {
        Self::answers(false, false)
    }

    pub fn answers(save: bool, extract: bool) -> Self {
        Self { save, extract }
    }
}

impl Confirm for FixedConfirm {
    fn confirm(&mut self, question: Question) -> Result<bool> {
        Ok(match question {
            Question::SaveResults => self.save,
            Question::ExtractArchives => self.extract,
        })
    }
}

/// Where a saved report goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportTarget {
    /// Timestamped name in the current directory
    #[default]
    CurrentDir,
    /// Timestamped name in the given directory
    Dir(PathBuf),
    /// Exactly this file
    File(PathBuf),
}

/// How the report is written to the run's output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report; status lines follow it on the same output
    #[default]
    Text,
    /// The JSON document only; status lines go to the log
    Json,
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub report: ScanReport,
    /// Path of the saved JSON report, if one was written
    pub saved_to: Option<PathBuf>,
    /// Batch result, if extraction ran
    pub extraction: Option<BatchSummary>,
}

/// Runs a check over one directory tree
#[derive(Debug, Clone)]
pub struct Driver {
    root: PathBuf,
    scan_options: ScanOptions,
    report_target: ReportTarget,
    output_format: OutputFormat,
}

impl Driver {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            scan_options: ScanOptions::default(),
            report_target: ReportTarget::default(),
            output_format: OutputFormat::default(),
        }
    }

    pub fn with_scan_options(mut self, scan_options: ScanOptions) -> Self {
        self.scan_options = scan_options;
        self
    }

    pub fn with_report_target(mut self, report_target: ReportTarget) -> Self {
        self.report_target = report_target;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scan and reconcile without any output or side effects
    pub fn check(&self) -> Result<ScanReport> {
        let index = scan_directory_with(&self.root, &self.scan_options)?;
        Ok(reconcile(&index))
    }

    /// Write the report to disk according to the configured target
    pub fn save(&self, report: &ScanReport) -> Result<PathBuf> {
        match &self.report_target {
            ReportTarget::CurrentDir => save_report(report, None),
            ReportTarget::Dir(dir) => save_report_in(report, dir),
            ReportTarget::File(file) => save_report(report, Some(file.as_path())),
        }
    }

    /// Run the full check.
    ///
    /// The report is always written to `out` in the configured format.
    /// Saving and extraction only happen when `confirm` agrees; extraction is
    /// not offered when nothing is pending.
    pub fn run(&self, confirm: &mut dyn Confirm, out: &mut dyn Write) -> Result<RunSummary> {
        let report = self.check()?;
        match self.output_format {
            OutputFormat::Text => write!(out, "{}", render_report(&report))?,
            OutputFormat::Json => writeln!(out, "{}", to_json_string(&report)?)?,
        }

        let mut summary = RunSummary::default();

        if confirm.confirm(Question::SaveResults)? {
            let path = self.save(&report)?;
            self.status(out, &format!("Results saved to: {}\n", path.display()))?;
            summary.saved_to = Some(path);
        }

        if !report.not_extracted.is_empty() && confirm.confirm(Question::ExtractArchives)? {
            info!(
                "Extracting {} pending archives",
                report.pending_archives()
            );
            let batch = extract_all(&report.not_extracted);
            self.status(out, &batch.to_string())?;
            summary.extraction = Some(batch);
        }

        summary.report = report;
        Ok(summary)
    }

    /// Status after the report: appended to text output, logged for JSON
    fn status(&self, out: &mut dyn Write, text: &str) -> Result<()> {
        match self.output_format {
            OutputFormat::Text => write!(out, "\n{}", text)?,
            OutputFormat::Json => {
                for line in text.lines().filter(|line| !line.trim().is_empty()) {
                    info!("{}", line.trim());
                }
            }
        }
        Ok(())
    }
}
