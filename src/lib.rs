//! downtidy - organize a folder's files into category subdirectories
//!
//! This library classifies files by extension through a fixed category
//! table and relocates each one into the matching subfolder, with a
//! simulate-only mode and per-decision logging to a file and stdout.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod logger;

pub use cli::{Cli, run_cli};
pub use file_category::{Category, CategoryTable};
pub use file_organizer::{Organizer, RunOutcome};
pub use logger::{LogLevel, Logger};
