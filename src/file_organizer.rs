/// File organization core.
///
/// This module scans the immediate entries of a target directory and moves
/// each regular, non-hidden file into a category subfolder chosen by its
/// extension. A simulate mode logs every intended action without touching
/// the filesystem. Per-file failures are logged and never abort the scan.
use crate::file_category::CategoryTable;
use crate::logger::Logger;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters accumulated over a single organization run.
///
/// `folders_created` counts distinct destination folders (in simulate mode,
/// folders that would be created).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Number of files successfully moved. Always zero in simulate mode.
    pub files_moved: usize,
    /// Number of distinct destination folders created (or, when simulating,
    /// that would be created).
    pub folders_created: usize,
}

/// Organizes a directory's files into category subfolders.
///
/// The organizer borrows its logging sink from the caller; it owns no
/// global state and keeps nothing between runs.
pub struct Organizer<'a> {
    logger: &'a Logger,
    table: CategoryTable,
}

impl<'a> Organizer<'a> {
    /// Creates an organizer reporting through the given logger.
    pub fn new(logger: &'a Logger) -> Self {
        Self {
            logger,
            table: CategoryTable::new(),
        }
    }

    /// Organizes the immediate entries of `target`.
    ///
    /// Every failure is reported through the logger rather than returned:
    /// a missing or unreadable target yields `(0, 0)`, and an individual
    /// file that cannot be moved is skipped while the scan continues.
    ///
    /// When `simulate` is true the filesystem is never mutated; intended
    /// folder creations and moves are logged, and the folder counter
    /// reflects what a live run would create while the move counter stays
    /// at zero.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use downtidy::file_organizer::Organizer;
    /// use downtidy::logger::{LogLevel, Logger};
    /// use std::path::Path;
    ///
    /// let logger = Logger::stdout_only(LogLevel::Info);
    /// let outcome = Organizer::new(&logger).organize(Path::new("~/Downloads"), true);
    /// println!("{} files, {} folders", outcome.files_moved, outcome.folders_created);
    /// ```
    pub fn organize(&self, target: &Path, simulate: bool) -> RunOutcome {
        let target = resolve_target(target);

        if !target.exists() {
            self.logger
                .error(&format!("Folder not found: {}", target.display()));
            return RunOutcome::default();
        }

        let entries = match fs::read_dir(&target) {
            Ok(entries) => entries,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to read folder {}: {}", target.display(), e));
                return RunOutcome::default();
            }
        };

        let mut files_moved = 0;
        let mut created_folders: HashSet<PathBuf> = HashSet::new();

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            // Filesystem paths keep the original OsString; the lossy form
            // is only for classification and log text, so non-UTF-8 names
            // are moved without being renamed.
            let display_name = file_name.to_string_lossy();

            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file || display_name.starts_with('.') {
                continue;
            }

            let category = self.table.classify(&display_name);
            let destination_folder = target.join(category.dir_name());

            if !destination_folder.exists() {
                if simulate {
                    self.logger.info(&format!(
                        "[DRY RUN] Would create folder: {}",
                        destination_folder.display()
                    ));
                    created_folders.insert(destination_folder.clone());
                } else {
                    // create_dir_all is idempotent; an already-existing
                    // folder is not an error.
                    match fs::create_dir_all(&destination_folder) {
                        Ok(()) => {
                            self.logger.info(&format!(
                                "Folder created: {}",
                                destination_folder.display()
                            ));
                            created_folders.insert(destination_folder.clone());
                        }
                        Err(e) => {
                            self.logger.error(&format!(
                                "Failed to create folder {}: {}",
                                destination_folder.display(),
                                e
                            ));
                            continue;
                        }
                    }
                }
            }

            let destination = destination_folder.join(&file_name);

            if simulate {
                self.logger.info(&format!(
                    "[DRY RUN] Would move: {} -> {}",
                    display_name,
                    destination.display()
                ));
            } else {
                match fs::rename(entry.path(), &destination) {
                    Ok(()) => {
                        self.logger.info(&format!(
                            "File moved: {} -> {}/",
                            display_name,
                            category.dir_name()
                        ));
                        files_moved += 1;
                    }
                    Err(e) => {
                        self.logger
                            .error(&format!("Failed to move {}: {}", display_name, e));
                    }
                }
            }
        }

        RunOutcome {
            files_moved,
            folders_created: created_folders.len(),
        }
    }
}

/// Resolves a user-supplied target to an absolute path, expanding a
/// leading `~` to the home directory.
fn resolve_target(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    std::path::absolute(&expanded).unwrap_or(expanded)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}
