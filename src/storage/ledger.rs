//! Ledger repository for JSON storage
//!
//! Manages loading and saving the record sequence in ledger.json. The
//! document is a bare array; insertion order is entry order and must be
//! preserved exactly.

use std::path::PathBuf;

use crate::error::PocketbookError;
use crate::models::Record;

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
///
/// Holds no data between calls: every operation is expected to load fresh
/// and write back the whole document.
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all records from disk
    ///
    /// A missing document is an empty ledger.
    pub fn load(&self) -> Result<Vec<Record>, PocketbookError> {
        read_json(&self.path)
    }

    /// Save the full record sequence, overwriting the document
    pub fn save(&self, records: &[Record]) -> Result<(), PocketbookError> {
        write_json_atomic(&self.path, &records)
    }
}
