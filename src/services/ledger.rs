//! Ledger service
//!
//! Business logic for the ledger operations: record entry with the budget
//! advisory, positional deletion with an explicit cancel variant, budget
//! ceilings, and the read-only reports. Every method loads the documents
//! fresh and, for mutations, writes the whole document back; validation
//! happens before any write so a failed operation never leaves partial
//! state behind.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{catalog, BudgetMap, EntryKind, Record};
use crate::reports::{
    CategoryBreakdown, FilterReport, LedgerSummary, MonthlyReport, RecordFilter, SavingsChallenge,
};
use crate::storage::Store;

/// Input for creating a new record
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub name: String,
    pub amount: i64,
    pub category: String,
    pub date: String,
    pub kind: EntryKind,
}

/// Advisory raised when an expense pushes a category past its ceiling
///
/// Purely informational: the insertion it accompanies has already
/// succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetAlert {
    /// The category that went over
    pub category: String,
    /// The configured ceiling
    pub limit: i64,
    /// Total expense for the category across the updated ledger
    pub spent: i64,
}

/// Result of a successful record insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The record as appended
    pub record: Record,
    /// Budget advisory, present only when a ceiling was exceeded
    pub alert: Option<BudgetAlert>,
}

/// Result of a deletion request
///
/// Cancellation is a first-class outcome, not an error: index 0 is the
/// caller's explicit "never mind".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record that was removed, for confirmation display
    Removed(Record),
    /// Index 0: nothing was done
    Cancelled,
}

/// Service for ledger operations over an injected store
pub struct LedgerService<S: Store> {
    store: S,
}

impl<S: Store> LedgerService<S> {
    /// Create a new ledger service
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Append a validated record to the ledger.
    ///
    /// After a successful expense insertion the category's total expense is
    /// recomputed over the updated ledger; if a budget ceiling exists and
    /// the total strictly exceeds it, a [`BudgetAlert`] advisory accompanies
    /// the outcome. The advisory never blocks the insertion.
    pub fn add_record(&self, input: NewRecord) -> PocketbookResult<AddOutcome> {
        let record = Record::new(input.name, input.amount, input.category, input.date, input.kind);

        record
            .validate()
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        let mut records = self.store.load_ledger()?;
        records.push(record.clone());
        self.store.save_ledger(&records)?;

        let alert = if record.is_expense() {
            let budget = self.store.load_budget()?;
            budget.get(&record.category).and_then(|&limit| {
                let spent: i64 = records
                    .iter()
                    .filter(|r| r.is_expense() && r.category == record.category)
                    .map(|r| r.amount)
                    .sum();
                (spent > limit).then(|| BudgetAlert {
                    category: record.category.clone(),
                    limit,
                    spent,
                })
            })
        } else {
            None
        };

        Ok(AddOutcome { record, alert })
    }

    /// Remove the record at a 1-based position.
    ///
    /// Index 0 is the explicit cancel sentinel and is always a no-op,
    /// including on an empty ledger. Any other out-of-range index is an
    /// [`PocketbookError::InvalidIndex`].
    pub fn delete_record(&self, index: usize) -> PocketbookResult<DeleteOutcome> {
        if index == 0 {
            return Ok(DeleteOutcome::Cancelled);
        }

        let mut records = self.store.load_ledger()?;
        if index > records.len() {
            return Err(PocketbookError::InvalidIndex {
                index,
                len: records.len(),
            });
        }

        let removed = records.remove(index - 1);
        self.store.save_ledger(&records)?;
        Ok(DeleteOutcome::Removed(removed))
    }

    /// Set a category's spending ceiling in the budget document
    pub fn set_budget(&self, category: &str, limit: i64) -> PocketbookResult<()> {
        if !catalog::is_leaf(category) {
            return Err(PocketbookError::validation(format!(
                "Category '{}' is not in the catalog",
                category
            )));
        }
        if limit < 1 {
            return Err(PocketbookError::validation(format!(
                "Budget ceiling must be a positive integer, got {}",
                limit
            )));
        }

        let mut budget = self.store.load_budget()?;
        budget.insert(category.to_string(), limit);
        self.store.save_budget(&budget)
    }

    /// All records in entry order
    pub fn records(&self) -> PocketbookResult<Vec<Record>> {
        self.store.load_ledger()
    }

    /// The current budget map
    pub fn budgets(&self) -> PocketbookResult<BudgetMap> {
        self.store.load_budget()
    }

    /// Whole-ledger income/expense summary
    pub fn summary(&self) -> PocketbookResult<LedgerSummary> {
        Ok(LedgerSummary::generate(&self.store.load_ledger()?))
    }

    /// Per-category expense breakdown
    pub fn category_breakdown(&self) -> PocketbookResult<CategoryBreakdown> {
        Ok(CategoryBreakdown::generate(&self.store.load_ledger()?))
    }

    /// Expense statistics for a `YYYY-MM` month prefix
    pub fn monthly_report(&self, month: &str) -> PocketbookResult<MonthlyReport> {
        Ok(MonthlyReport::generate(&self.store.load_ledger()?, month))
    }

    /// Savings challenge classification against a daily threshold
    pub fn savings_challenge(&self, threshold: i64) -> PocketbookResult<SavingsChallenge> {
        Ok(SavingsChallenge::generate(
            &self.store.load_ledger()?,
            threshold,
        ))
    }

    /// Summary over the subset matching a filter
    pub fn filter_report(&self, filter: &RecordFilter) -> PocketbookResult<FilterReport> {
        Ok(FilterReport::generate(&self.store.load_ledger()?, filter))
    }
}
