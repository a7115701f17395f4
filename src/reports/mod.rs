//! Reports module for pocketbook
//!
//! Pure aggregations over the record sequence: whole-ledger totals,
//! per-category spending, monthly statistics, the savings challenge, and
//! ad-hoc filtered summaries. Every generator is a pure function of its
//! inputs; nothing here touches storage.

pub mod by_category;
pub mod filter;
pub mod monthly;
pub mod savings;
pub mod summary;

pub use by_category::{CategoryBreakdown, CategoryTotal};
pub use filter::{FilterReport, RecordFilter};
pub use monthly::MonthlyReport;
pub use savings::{SavingsChallenge, DEFAULT_DAILY_THRESHOLD};
pub use summary::LedgerSummary;
