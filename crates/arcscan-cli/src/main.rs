//! arcscan-cli - Command-line interface for arcscan
//!
//! This crate provides the `arcscan` binary:
//! - Checking a directory tree for archives that were never extracted
//! - Saving the results as a JSON report
//! - Extracting pending archives in one batch, or a single archive on demand

use anyhow::{anyhow, Result};
use arcscan_core::config::Config;
use arcscan_core::{
    extract_archive, Driver, ExtractOutcome, OutputFormat, Question, ReportTarget, ScanOptions,
};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod prompt;

use prompt::CliConfirm;

/// arcscan - find archives that were never extracted
///
/// An archive counts as extracted when a file or folder with the same base
/// name sits anywhere in the tree, e.g. `photos.zip` next to `photos/`.
#[derive(Parser)]
#[command(name = "arcscan")]
#[command(author, version, about = "Find archives that were never extracted", long_about = None)]
struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a directory for unextracted archives
    Check {
        /// Directory to check (defaults to scan.root from the config file)
        root: Option<PathBuf>,

        /// Save the results without asking, optionally to FILE
        #[arg(long, value_name = "FILE", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Extract the pending archives without asking
        #[arg(long)]
        extract: bool,

        /// Answer yes to every question
        #[arg(short, long)]
        yes: bool,

        /// Never prompt; anything not requested by a flag is declined
        #[arg(long, conflicts_with = "yes")]
        no_input: bool,

        /// Print the results as JSON instead of the text report
        #[arg(long)]
        json: bool,

        /// Follow symlinks while walking the tree
        #[arg(long)]
        follow_links: bool,
    },

    /// Extract a single archive
    Extract {
        /// Archive file to extract
        archive: PathBuf,

        /// Output directory (defaults to a folder named after the archive)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        /// Show current configuration
        #[arg(long, conflicts_with = "path")]
        show: bool,

        /// Show configuration file path
        #[arg(long, conflicts_with = "show")]
        path: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    // fatal errors are still reported under --quiet
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let result = run();

    match result {
        Ok(_) => process::exit(0),
        Err(e) => {
            error!("Error: {}", e);

            let exit_code = map_error_to_exit_code(&e);
            process::exit(exit_code);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Check {
            root,
            save,
            extract,
            yes,
            no_input,
            json,
            follow_links,
        } => {
            let config = Config::load_or_default();

            let root = root.or_else(|| config.scan.root.clone()).ok_or_else(|| {
                anyhow!("Missing root argument: pass a directory or set scan.root in the config")
            })?;

            let scan_options = ScanOptions {
                follow_links: follow_links || config.scan.follow_links,
            };

            let report_target = match (&save, &config.report.output_dir) {
                (Some(Some(file)), _) => ReportTarget::File(file.clone()),
                (_, Some(dir)) => ReportTarget::Dir(dir.clone()),
                _ => ReportTarget::CurrentDir,
            };

            let mut confirm = CliConfirm::interactive();
            if save.is_some() {
                confirm = confirm.answer(Question::SaveResults, true);
            }
            if extract {
                confirm = confirm.answer(Question::ExtractArchives, true);
            }
            if no_input {
                confirm = confirm.answer_rest(false);
            } else if yes || config.prompt.assume_yes {
                confirm = confirm.answer_rest(true);
            } else if json {
                confirm = confirm.answer_rest(false);
            }

            let output_format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };

            info!("Checking directory: {}", root.display());
            let driver = Driver::new(&root)
                .with_scan_options(scan_options)
                .with_report_target(report_target)
                .with_output_format(output_format);

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = driver.run(&mut confirm, &mut out)?;

            if let Some(batch) = &summary.extraction {
                batch.ensure_success()?;
            }
        }

        Commands::Extract { archive, output } => {
            info!("Extracting archive: {}", archive.display());

            match extract_archive(&archive, output.as_deref())? {
                ExtractOutcome::Extracted {
                    format,
                    destination,
                } => {
                    println!(
                        "Extracted {} archive to {}",
                        format,
                        destination.display()
                    );
                }
                ExtractOutcome::Unsupported { path } => {
                    println!("Skipped unsupported archive: {}", path.display());
                }
            }
        }

        Commands::Config { show: _, path } => {
            if path {
                let config_path = Config::config_path()
                    .map_err(|e| anyhow!("Failed to get config path: {}", e))?;
                println!("{}", config_path.display());
            } else {
                let config = Config::load()?;
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn map_error_to_exit_code(err: &anyhow::Error) -> i32 {
    use arcscan_core::Error;

    if let Some(core_err) = err.downcast_ref::<Error>() {
        match core_err {
            Error::Io(_) => 2,
            Error::DirectoryNotFound(_) => 2,
            Error::InvalidPath(_) => 3,
            Error::Zip(_) => 4,
            Error::SevenZ(_) => 4,
            Error::Rar(_) => 4,
            Error::PartialFailure { .. } => 4,
            Error::Json(_) => 1,
            Error::Config(_) => 1,
            Error::Other(_) => 1,
        }
    } else if err.is::<std::io::Error>() {
        2
    } else if err.to_string().contains("argument") {
        3
    } else {
        1
    }
}
