//! Logging sink for organization runs.
//!
//! Every decision the organizer makes is reported through an explicit
//! [`Logger`] handle owned by the CLI glue and borrowed by the core, rather
//! than through process-global logger state. Each line is written in
//! `<timestamp> - <LEVEL> - <message>` format to an append-mode UTF-8 log
//! file and mirrored to standard output.

use chrono::Local;
use clap::ValueEnum;
use colored::Colorize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Log verbosity levels, ordered from most to least verbose.
///
/// The selected level only filters output; it never changes what the
/// organizer does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Returns the level name as it appears in log lines.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A logging handle writing to a log file and standard output.
///
/// Messages below the configured level are dropped. Write failures while
/// logging are swallowed: a broken log sink must never abort an
/// organization run.
pub struct Logger {
    level: LogLevel,
    file: Option<Mutex<File>>,
    mirror_stdout: bool,
}

impl Logger {
    /// Creates a logger writing to the default log file next to the
    /// executable, mirrored to stdout.
    pub fn new(level: LogLevel) -> io::Result<Self> {
        Self::with_file(level, &default_log_path()?)
    }

    /// Creates a logger writing to the given log file, mirrored to stdout.
    ///
    /// The file is opened in append mode and created if missing.
    pub fn with_file(level: LogLevel, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            file: Some(Mutex::new(file)),
            mirror_stdout: true,
        })
    }

    /// Creates a logger writing only to the given file, without the stdout
    /// mirror. Used by tests that assert on log contents.
    pub fn file_only(level: LogLevel, path: &Path) -> io::Result<Self> {
        let mut logger = Self::with_file(level, path)?;
        logger.mirror_stdout = false;
        Ok(logger)
    }

    /// Creates a logger writing only to stdout.
    ///
    /// Fallback for when the log file cannot be opened; the run still
    /// proceeds with console output.
    pub fn stdout_only(level: LogLevel) -> Self {
        Self {
            level,
            file: None,
            mirror_stdout: true,
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} - {} - {}", timestamp, level.label(), message);

        if self.mirror_stdout {
            match level {
                LogLevel::Error => println!("{}", line.red()),
                LogLevel::Warning => println!("{}", line.yellow()),
                LogLevel::Debug => println!("{}", line.dimmed()),
                LogLevel::Info => println!("{}", line),
            }
        }

        if let Some(file) = &self.file
            && let Ok(mut file) = file.lock()
        {
            let _ = writeln!(file, "{}", line);
        }
    }
}

/// Returns the default log file path, co-located with the executable.
fn default_log_path() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(match exe.parent() {
        Some(dir) => dir.join("downtidy.log"),
        None => PathBuf::from("downtidy.log"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_log_line_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("test.log");

        let logger = Logger::file_only(LogLevel::Info, &log_path).expect("Failed to open log");
        logger.info("hello world");

        let contents = fs::read_to_string(&log_path).expect("Failed to read log");
        let line = contents.lines().next().expect("Log should have one line");
        assert!(line.ends_with(" - INFO - hello world"), "got: {}", line);
        // Timestamp prefix: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(line.split(" - ").next().map(str::len), Some(19));
    }

    #[test]
    fn test_level_filtering() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("test.log");

        let logger = Logger::file_only(LogLevel::Warning, &log_path).expect("Failed to open log");
        logger.debug("too quiet");
        logger.info("still too quiet");
        logger.warning("audible");
        logger.error("loud");

        let contents = fs::read_to_string(&log_path).expect("Failed to read log");
        assert!(!contents.contains("too quiet"));
        assert!(contents.contains("WARNING - audible"));
        assert!(contents.contains("ERROR - loud"));
    }

    #[test]
    fn test_append_mode_preserves_previous_runs() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let log_path = temp_dir.path().join("test.log");

        {
            let logger = Logger::file_only(LogLevel::Info, &log_path).expect("Failed to open log");
            logger.info("first run");
        }
        {
            let logger = Logger::file_only(LogLevel::Info, &log_path).expect("Failed to open log");
            logger.info("second run");
        }

        let contents = fs::read_to_string(&log_path).expect("Failed to read log");
        assert!(contents.contains("first run"));
        assert!(contents.contains("second run"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(LogLevel::Debug.label(), "DEBUG");
        assert_eq!(LogLevel::Info.label(), "INFO");
        assert_eq!(LogLevel::Warning.label(), "WARNING");
        assert_eq!(LogLevel::Error.label(), "ERROR");
    }
}
