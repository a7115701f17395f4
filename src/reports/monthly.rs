//! Monthly spending statistics
//!
//! Total expense for one month and the category that received the most of
//! it. The month is matched as a literal `YYYY-MM` prefix of the date
//! string, never parsed as a calendar value.

use crate::models::Record;

use super::by_category::{CategoryBreakdown, CategoryTotal};

/// Expense statistics for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyReport {
    /// The `YYYY-MM` prefix the report was generated for
    pub month: String,
    /// Total expense across the month
    pub total: i64,
    /// Category with the largest summed expense; `None` when the month has
    /// no expense records. Ties go to the category seen first.
    pub top_category: Option<String>,
}

impl MonthlyReport {
    /// Generate the report for a month prefix
    pub fn generate(records: &[Record], month: &str) -> Self {
        let month_records: Vec<Record> = records
            .iter()
            .filter(|r| r.is_expense() && r.date.starts_with(month))
            .cloned()
            .collect();

        let breakdown = CategoryBreakdown::generate(&month_records);

        // Strictly-greater scan: the first category to reach the maximal
        // sum wins ties.
        let mut top: Option<&CategoryTotal> = None;
        for entry in &breakdown.entries {
            match top {
                Some(current) if entry.spent <= current.spent => {}
                _ => top = Some(entry),
            }
        }

        Self {
            month: month.to_string(),
            total: breakdown.total_spent(),
            top_category: top.map(|e| e.category.clone()),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("[Monthly Spending: {}]\n", self.month));
        output.push_str(&format!("- Total expense: {}원\n", self.total));
        output.push_str(&format!(
            "- Top category:  {}\n",
            self.top_category.as_deref().unwrap_or("(none)")
        ));
        output
    }
}
