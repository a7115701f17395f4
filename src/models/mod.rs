//! Core data models for pocketbook
//!
//! This module contains the data structures that represent the ledger
//! domain: records, the entry kind, the category catalog, and the budget map.

pub mod catalog;
pub mod record;

use std::collections::BTreeMap;

pub use record::{EntryKind, Record, RecordValidationError};

/// Mapping from category leaf name to a positive spending ceiling.
///
/// A category with no entry is unbounded. Ordered so the serialized
/// document is stable across saves.
pub type BudgetMap = BTreeMap<String, i64>;
