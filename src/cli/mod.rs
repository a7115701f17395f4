//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Handlers render payloads
//! and advisories; all business logic stays in the core.

pub mod budget;
pub mod entry;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_add, handle_delete, handle_list, KindArg};
pub use report::{
    handle_categories, handle_catalog, handle_challenge, handle_filter, handle_monthly,
    handle_summary,
};

use crate::models::catalog;

/// Resolve a category argument that may be a leaf name or a 1-based
/// selector number.
///
/// Unresolvable input is passed through unchanged so the core's
/// validation reports it.
pub(crate) fn resolve_category(arg: &str) -> String {
    match arg.parse::<usize>() {
        Ok(n) => catalog::leaf_at(n)
            .map(str::to_string)
            .unwrap_or_else(|| arg.to_string()),
        Err(_) => arg.to_string(),
    }
}
