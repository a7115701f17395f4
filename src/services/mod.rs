//! Service layer for pocketbook
//!
//! The service layer runs the ledger operations: each call is one full
//! load → validate/compute → save cycle against the injected store, so the
//! durable documents stay the single source of truth.

pub mod ledger;

pub use ledger::{AddOutcome, BudgetAlert, DeleteOutcome, LedgerService, NewRecord};
