//! Command-line interface module.
//!
//! Thin glue around the organizer core: argument parsing, logger setup,
//! and summary reporting. The process always exits 0 — a missing folder or
//! individual move failures are reported through the log, not the exit code.

use crate::file_organizer::Organizer;
use crate::logger::{LogLevel, Logger};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Organize a folder's files into category subdirectories by extension.
#[derive(Debug, Parser)]
#[command(name = "downtidy", version)]
pub struct Cli {
    /// Folder to organize (defaults to the user's Downloads folder).
    #[arg(long, default_value_os_t = default_target_folder())]
    pub folder: PathBuf,

    /// Simulate the organization without moving any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Log verbosity.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, ignore_case = true)]
    pub log_level: LogLevel,
}

/// Returns the user's default download location.
fn default_target_folder() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Runs one organization pass with the parsed arguments.
///
/// Sets up the logging sink once, hands it to the organizer, and logs the
/// summary block at the end. Never returns an error: every failure mode is
/// reported through the log stream.
pub fn run_cli(cli: &Cli) {
    let logger = match Logger::new(cli.log_level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Warning: could not open log file ({}); logging to stdout only", e);
            Logger::stdout_only(cli.log_level)
        }
    };

    logger.info(&format!(
        "Starting organization of folder: {}",
        cli.folder.display()
    ));
    if cli.dry_run {
        logger.warning("Simulation mode enabled (no files will be moved)");
    }

    let start = Instant::now();
    let outcome = Organizer::new(&logger).organize(&cli.folder, cli.dry_run);
    let elapsed = start.elapsed();

    logger.info("Summary:");
    logger.info(&format!("  Files moved: {}", outcome.files_moved));
    logger.info(&format!("  Folders created: {}", outcome.folders_created));
    logger.info(&format!(
        "  Elapsed time: {:.2} seconds",
        elapsed.as_secs_f64()
    ));

    if cli.dry_run {
        logger.info("Simulation complete (run without --dry-run to apply)");
    } else {
        logger.info("Organization complete!");
    }
}
