//! Path management for pocketbook
//!
//! Resolves the data directory holding the two backing documents.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (`--data-dir` flag or `POCKETBOOK_DATA_DIR`)
//! 2. The platform data directory (e.g. `~/.local/share/pocketbook` on
//!    Linux, `~/Library/Application Support/pocketbook` on macOS)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PocketbookError;

/// Manages all paths used by pocketbook
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for all pocketbook data
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance using the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PocketbookError> {
        let dirs = ProjectDirs::from("", "", "pocketbook").ok_or_else(|| {
            PocketbookError::Config("Could not determine a data directory".into())
        })?;
        Ok(Self {
            base_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Create Paths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger document
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Get the path to the budget document
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), PocketbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketbookError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}
