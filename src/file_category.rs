//! Extension-based file categorization.
//!
//! This module maps filename extensions to broad categories (e.g. "images",
//! "documents") through a fixed, ordered table. Matching is case-insensitive
//! and first-match-wins; anything the table does not recognize falls back to
//! the catch-all "others" category.
//!
//! # Examples
//!
//! ```
//! use downtidy::file_category::{Category, CategoryTable};
//!
//! let table = CategoryTable::default();
//! assert_eq!(table.lookup(".jpg"), Some(Category::Images));
//! assert_eq!(table.classify("report.PDF"), Category::Documents);
//! assert_eq!(table.classify("mystery.xyz"), Category::Others);
//! ```

/// Represents a destination category for organized files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, etc.)
    Images,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Spreadsheet files (XLSX, CSV, ODS)
    Spreadsheets,
    /// Compressed archives (ZIP, RAR, 7Z, TAR.GZ)
    CompressedFiles,
    /// Video files (MP4, MOV, AVI, MKV)
    Videos,
    /// Audio files (MP3, WAV, FLAC)
    Audio,
    /// Installers and executables (EXE, MSI, DMG)
    Apps,
    /// Source code files (Python, JavaScript, C++, etc.)
    Programming,
    /// Torrent files
    Torrents,
    /// Anything the table does not recognize
    Others,
}

impl Category {
    /// Returns the subfolder name for this category.
    ///
    /// These names are part of the on-disk layout and must stay stable:
    /// a renamed category would strand previously organized files.
    ///
    /// # Examples
    ///
    /// ```
    /// use downtidy::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::CompressedFiles.dir_name(), "compressed_files");
    /// assert_eq!(Category::Others.dir_name(), "others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Spreadsheets => "spreadsheets",
            Category::CompressedFiles => "compressed_files",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Apps => "apps",
            Category::Programming => "programming",
            Category::Torrents => "torrents",
            Category::Others => "others",
        }
    }
}

/// Ordered extension table. Earlier entries win when an extension could
/// conceptually match more than one category (extensions are disjoint by
/// construction, so the order only matters as a tie-break guarantee).
const TABLE: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &[".jpg", ".png", ".gif", ".jpeg", ".webp"],
    ),
    (
        Category::Documents,
        &[".pdf", ".docx", ".txt", ".pptx", ".odt"],
    ),
    (Category::Spreadsheets, &[".xlsx", ".csv", ".ods"]),
    (
        Category::CompressedFiles,
        &[".zip", ".rar", ".7z", ".tar.gz"],
    ),
    (Category::Videos, &[".mp4", ".mov", ".avi", ".mkv"]),
    (Category::Audio, &[".mp3", ".wav", ".flac"]),
    (Category::Apps, &[".exe", ".msi", ".dmg"]),
    (
        Category::Programming,
        &[".py", ".js", ".html", ".css", ".cpp", ".java"],
    ),
    (Category::Torrents, &[".torrent"]),
];

/// Immutable mapping from file extensions to categories.
///
/// The table is fixed for the lifetime of a run; there are no mutation
/// operations.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    entries: &'static [(Category, &'static [&'static str])],
}

impl CategoryTable {
    /// Creates the table with the built-in category mappings.
    pub fn new() -> Self {
        Self { entries: TABLE }
    }

    /// Looks up an extension (with leading dot) case-insensitively.
    ///
    /// Returns `None` when no category lists the extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use downtidy::file_category::{Category, CategoryTable};
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.lookup(".CSV"), Some(Category::Spreadsheets));
    /// assert_eq!(table.lookup(".xyz"), None);
    /// ```
    pub fn lookup(&self, extension: &str) -> Option<Category> {
        let extension = extension.to_lowercase();
        for (category, extensions) in self.entries {
            if extensions.contains(&extension.as_str()) {
                return Some(*category);
            }
        }
        None
    }

    /// Classifies a file name, falling back to [`Category::Others`].
    ///
    /// Table extensions are matched as suffixes of the lower-cased name
    /// rather than against the last-dot segment alone, so the compound
    /// ".tar.gz" entry matches "backup.tar.gz" instead of falling through
    /// on ".gz".
    ///
    /// # Examples
    ///
    /// ```
    /// use downtidy::file_category::{Category, CategoryTable};
    ///
    /// let table = CategoryTable::default();
    /// assert_eq!(table.classify("photo.JPG"), Category::Images);
    /// assert_eq!(table.classify("backup.tar.gz"), Category::CompressedFiles);
    /// assert_eq!(table.classify("README"), Category::Others);
    /// ```
    pub fn classify(&self, file_name: &str) -> Category {
        let name = file_name.to_lowercase();
        for (category, extensions) in self.entries {
            for extension in *extensions {
                if name.ends_with(extension) {
                    return *category;
                }
            }
        }
        Category::Others
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
