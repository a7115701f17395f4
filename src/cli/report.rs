//! Report CLI commands
//!
//! Thin wrappers that generate a report payload and print its terminal
//! rendering.

use crate::error::PocketbookResult;
use crate::models::catalog;
use crate::reports::RecordFilter;
use crate::services::LedgerService;
use crate::storage::Store;

/// Handle the summary command
pub fn handle_summary<S: Store>(service: &LedgerService<S>) -> PocketbookResult<()> {
    print!("{}", service.summary()?.format_terminal());
    Ok(())
}

/// Handle the categories command
pub fn handle_categories<S: Store>(service: &LedgerService<S>) -> PocketbookResult<()> {
    let breakdown = service.category_breakdown()?;
    if breakdown.entries.is_empty() {
        println!("No expenses recorded yet.");
    } else {
        print!("{}", breakdown.format_terminal());
    }
    Ok(())
}

/// Handle the catalog command: print the selectable category numbers
pub fn handle_catalog() -> PocketbookResult<()> {
    println!("[Category Catalog]");
    let mut number = 1;
    for group in catalog::GROUPS {
        let mut line = String::new();
        for leaf in group.leaves {
            line.push_str(&format!("{}. {}  ", number, leaf));
            number += 1;
        }
        println!("{}: {}", group.name, line.trim_end());
    }
    Ok(())
}

/// Handle the monthly command
pub fn handle_monthly<S: Store>(service: &LedgerService<S>, month: &str) -> PocketbookResult<()> {
    print!("{}", service.monthly_report(month)?.format_terminal());
    Ok(())
}

/// Handle the challenge command
pub fn handle_challenge<S: Store>(
    service: &LedgerService<S>,
    threshold: i64,
) -> PocketbookResult<()> {
    print!("{}", service.savings_challenge(threshold)?.format_terminal());
    Ok(())
}

/// Handle the filter command
pub fn handle_filter<S: Store>(
    service: &LedgerService<S>,
    month: Option<String>,
    category: Option<String>,
) -> PocketbookResult<()> {
    let mut filter = RecordFilter::new();
    if let Some(month) = month {
        filter = filter.month(month);
    }
    if let Some(category) = category {
        filter = filter.category(super::resolve_category(&category));
    }

    print!("{}", service.filter_report(&filter)?.format_terminal());
    Ok(())
}
