//! Budget CLI commands
//!
//! Implements ceiling management over the budget document.

use clap::Subcommand;

use crate::error::PocketbookResult;
use crate::services::LedgerService;
use crate::storage::Store;

use super::resolve_category;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a category's spending ceiling
    Set {
        /// Category leaf name or its 1-based number (see `catalog`)
        category: String,
        /// Ceiling amount in won
        amount: i64,
    },

    /// List configured ceilings
    List,
}

/// Handle a budget command
pub fn handle_budget_command<S: Store>(
    service: &LedgerService<S>,
    cmd: BudgetCommands,
) -> PocketbookResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = resolve_category(&category);
            service.set_budget(&category, amount)?;
            println!("Budget for '{}' set to {}원", category, amount);
        }
        BudgetCommands::List => {
            let budget = service.budgets()?;
            if budget.is_empty() {
                println!("No budget ceilings configured.");
            } else {
                println!("[Budget Ceilings]");
                for (category, limit) in &budget {
                    println!("- {}: {}원", category, limit);
                }
            }
        }
    }

    Ok(())
}
