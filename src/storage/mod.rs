//! Storage layer for pocketbook
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Persistence is abstracted behind the [`Store`] trait so the
//! service layer can be exercised against an in-memory backend in tests.

pub mod budget;
pub mod file_io;
pub mod ledger;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;

use std::cell::RefCell;

use crate::config::Paths;
use crate::error::PocketbookError;
use crate::models::{BudgetMap, Record};

/// Abstraction over persistence backends for the two documents.
///
/// Each load returns the document's full current contents; each save
/// overwrites the document whole. Implementations keep no state that
/// survives across calls, making "the durable document" the single source
/// of truth.
pub trait Store {
    /// Load the full record sequence (empty if no document exists)
    fn load_ledger(&self) -> Result<Vec<Record>, PocketbookError>;

    /// Overwrite the ledger document with the given sequence
    fn save_ledger(&self, records: &[Record]) -> Result<(), PocketbookError>;

    /// Load the budget map (empty if no document exists)
    fn load_budget(&self) -> Result<BudgetMap, PocketbookError>;

    /// Overwrite the budget document with the given map
    fn save_budget(&self, budget: &BudgetMap) -> Result<(), PocketbookError>;
}

/// File-backed store coordinating the two document repositories
pub struct JsonStore {
    ledger: LedgerRepository,
    budget: BudgetRepository,
}

impl JsonStore {
    /// Create a new JsonStore, ensuring the data directory exists
    pub fn new(paths: &Paths) -> Result<Self, PocketbookError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            budget: BudgetRepository::new(paths.budget_file()),
        })
    }
}

impl Store for JsonStore {
    fn load_ledger(&self) -> Result<Vec<Record>, PocketbookError> {
        self.ledger.load()
    }

    fn save_ledger(&self, records: &[Record]) -> Result<(), PocketbookError> {
        self.ledger.save(records)
    }

    fn load_budget(&self) -> Result<BudgetMap, PocketbookError> {
        self.budget.load()
    }

    fn save_budget(&self, budget: &BudgetMap) -> Result<(), PocketbookError> {
        self.budget.save(budget)
    }
}

/// In-memory store (useful for testing)
///
/// Single-threaded by design, matching the application's single-actor
/// model.
#[derive(Default)]
pub struct MemoryStore {
    ledger: RefCell<Vec<Record>>,
    budget: RefCell<BudgetMap>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store seeded with records and budgets
    pub fn with_contents(records: Vec<Record>, budget: BudgetMap) -> Self {
        Self {
            ledger: RefCell::new(records),
            budget: RefCell::new(budget),
        }
    }
}

impl Store for MemoryStore {
    fn load_ledger(&self) -> Result<Vec<Record>, PocketbookError> {
        Ok(self.ledger.borrow().clone())
    }

    fn save_ledger(&self, records: &[Record]) -> Result<(), PocketbookError> {
        *self.ledger.borrow_mut() = records.to_vec();
        Ok(())
    }

    fn load_budget(&self) -> Result<BudgetMap, PocketbookError> {
        Ok(self.budget.borrow().clone())
    }

    fn save_budget(&self, budget: &BudgetMap) -> Result<(), PocketbookError> {
        *self.budget.borrow_mut() = budget.clone();
        Ok(())
    }
}
