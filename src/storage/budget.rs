//! Budget repository for JSON storage
//!
//! Manages loading and saving the per-category ceiling map in budget.json.
//! Independent lifecycle from the ledger document.

use std::path::PathBuf;

use crate::error::PocketbookError;
use crate::models::BudgetMap;

use super::file_io::{read_json, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the budget map from disk
    ///
    /// A missing document is an empty map (every category unbounded).
    pub fn load(&self) -> Result<BudgetMap, PocketbookError> {
        read_json(&self.path)
    }

    /// Save the full budget map, overwriting the document
    pub fn save(&self, budget: &BudgetMap) -> Result<(), PocketbookError> {
        write_json_atomic(&self.path, budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, repo) = create_test_repo();

        let mut budget = BudgetMap::new();
        budget.insert("점심".to_string(), 100000);
        budget.insert("카페".to_string(), 30000);

        repo.save(&budget).unwrap();
        assert_eq!(repo.load().unwrap(), budget);
    }

    #[test]
    fn test_document_is_a_bare_object() {
        let (temp_dir, repo) = create_test_repo();

        let mut budget = BudgetMap::new();
        budget.insert("택시".to_string(), 50000);
        repo.save(&budget).unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("budget.json")).unwrap();
        assert!(raw.trim_start().starts_with('{'));
        assert!(raw.contains("택시"));
    }

    #[test]
    fn test_corrupt_document() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("budget.json"), "[1, 2").unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_corrupt_store());
    }
}
