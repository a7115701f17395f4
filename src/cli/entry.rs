//! Record entry CLI commands
//!
//! Implements add, list, and delete over the ledger service.

use clap::ValueEnum;

use crate::error::PocketbookResult;
use crate::models::EntryKind;
use crate::services::{DeleteOutcome, LedgerService, NewRecord};
use crate::storage::Store;

use super::resolve_category;

/// Entry kind as a CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Money in
    Income,
    /// Money out
    Expense,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => EntryKind::Income,
            KindArg::Expense => EntryKind::Expense,
        }
    }
}

/// Handle the add command
pub fn handle_add<S: Store>(
    service: &LedgerService<S>,
    name: String,
    amount: i64,
    category: String,
    date: String,
    kind: KindArg,
) -> PocketbookResult<()> {
    let outcome = service.add_record(NewRecord {
        name,
        amount,
        category: resolve_category(&category),
        date,
        kind: kind.into(),
    })?;

    println!("Saved: {}", outcome.record);
    if let Some(alert) = outcome.alert {
        println!(
            "Warning: '{}' is over budget ({}원 spent, ceiling {}원)",
            alert.category, alert.spent, alert.limit
        );
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list<S: Store>(service: &LedgerService<S>) -> PocketbookResult<()> {
    let records = service.records()?;
    if records.is_empty() {
        println!("The ledger is empty.");
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!("{}. {}", i + 1, record);
    }

    Ok(())
}

/// Handle the delete command
pub fn handle_delete<S: Store>(service: &LedgerService<S>, index: usize) -> PocketbookResult<()> {
    match service.delete_record(index)? {
        DeleteOutcome::Removed(record) => println!("Deleted: {}", record),
        DeleteOutcome::Cancelled => println!("Deletion cancelled."),
    }
    Ok(())
}
