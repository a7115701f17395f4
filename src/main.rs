use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use pocketbook::cli::{
    handle_add, handle_budget_command, handle_catalog, handle_categories, handle_challenge,
    handle_delete, handle_filter, handle_list, handle_monthly, handle_summary, BudgetCommands,
    KindArg,
};
use pocketbook::config::Paths;
use pocketbook::reports::DEFAULT_DAILY_THRESHOLD;
use pocketbook::services::LedgerService;
use pocketbook::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Terminal-based household ledger",
    long_about = "pocketbook is a terminal-based household ledger. It records \
                  income and expense entries against a fixed category catalog, \
                  tracks per-category budget ceilings, and reports totals, \
                  monthly statistics, and savings-challenge results."
)]
struct Cli {
    /// Data directory holding ledger.json and budget.json
    #[arg(long, global = true, env = "POCKETBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an income or expense record
    Add {
        /// Item name
        name: String,
        /// Amount in won
        amount: i64,
        /// Category leaf name or its 1-based number (see `catalog`)
        #[arg(short, long)]
        category: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Income or expense
        #[arg(short = 't', long = "type", value_enum, default_value = "expense")]
        kind: KindArg,
    },

    /// List all records with their 1-based positions
    List,

    /// Delete the record at a 1-based position (0 cancels)
    Delete {
        /// Position shown by `list`; 0 is an explicit cancel
        index: usize,
    },

    /// Show the whole-ledger income/expense summary
    Summary,

    /// Show expense totals per category
    Categories,

    /// Show the selectable category catalog
    Catalog,

    /// Budget ceiling management
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show spending statistics for a month
    Monthly {
        /// Month prefix (YYYY-MM), defaults to the current month
        month: Option<String>,
    },

    /// Show savings challenge results
    Challenge {
        /// Daily spending ceiling in won
        #[arg(short, long, default_value_t = DEFAULT_DAILY_THRESHOLD)]
        threshold: i64,
    },

    /// Summarize records matching a month and/or category
    Filter {
        /// Month prefix (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Category leaf name or its 1-based number
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the resolved data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => Paths::with_base_dir(dir),
        None => Paths::new()?,
    };

    if let Commands::Config = cli.command {
        println!("pocketbook configuration");
        println!("========================");
        println!("Data directory: {}", paths.base_dir().display());
        println!("Ledger file:    {}", paths.ledger_file().display());
        println!("Budget file:    {}", paths.budget_file().display());
        return Ok(());
    }

    let service = LedgerService::new(JsonStore::new(&paths)?);

    match cli.command {
        Commands::Add {
            name,
            amount,
            category,
            date,
            kind,
        } => {
            let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            handle_add(&service, name, amount, category, date, kind)?;
        }
        Commands::List => handle_list(&service)?,
        Commands::Delete { index } => handle_delete(&service, index)?,
        Commands::Summary => handle_summary(&service)?,
        Commands::Categories => handle_categories(&service)?,
        Commands::Catalog => handle_catalog()?,
        Commands::Budget(cmd) => handle_budget_command(&service, cmd)?,
        Commands::Monthly { month } => {
            let month = month.unwrap_or_else(|| Local::now().format("%Y-%m").to_string());
            handle_monthly(&service, &month)?;
        }
        Commands::Challenge { threshold } => handle_challenge(&service, threshold)?,
        Commands::Filter { month, category } => handle_filter(&service, month, category)?,
        Commands::Config => unreachable!("handled above"),
    }

    Ok(())
}
