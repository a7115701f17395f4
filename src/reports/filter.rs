//! Ad-hoc record filtering
//!
//! Totals over the subset of records matching an optional month prefix
//! and/or an exact category. An unsatisfied filter is an advisory, not an
//! error.

use crate::models::Record;

/// Options for filtering records
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep records whose date starts with this literal prefix
    pub month: Option<String>,
    /// Keep records whose category matches exactly
    pub category: Option<String>,
}

impl RecordFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by month prefix
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Filter by exact category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check whether a record satisfies the filter
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(month) = &self.month {
            if !record.date.starts_with(month.as_str()) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if record.category != *category {
                return false;
            }
        }
        true
    }
}

/// Summary over a filtered subset of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Sum of income amounts in the subset
    pub total_income: i64,
    /// Sum of expense amounts in the subset
    pub total_expense: i64,
    /// Number of expense records in the subset
    pub expense_count: usize,
    /// `total_income - total_expense`
    pub balance: i64,
    /// True when the filtered subset is empty (advisory, not an error)
    pub matched_empty: bool,
}

impl FilterReport {
    /// Generate the report over the records matching the filter
    pub fn generate(records: &[Record], filter: &RecordFilter) -> Self {
        let matched: Vec<&Record> = records.iter().filter(|r| filter.matches(r)).collect();

        let total_income: i64 = matched
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();
        let total_expense: i64 = matched
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum();
        let expense_count = matched.iter().filter(|r| r.is_expense()).count();

        Self {
            total_income,
            total_expense,
            expense_count,
            balance: total_income - total_expense,
            matched_empty: matched.is_empty(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("[Filter Result]\n");
        output.push_str(&format!("- Total income:  {}원\n", self.total_income));
        output.push_str(&format!(
            "- Total expense: {}원 ({} record(s))\n",
            self.total_expense, self.expense_count
        ));
        output.push_str(&format!("- Balance:       {}원\n", self.balance));
        if self.matched_empty {
            output.push_str("No records matched the given criteria.\n");
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn sample_ledger() -> Vec<Record> {
        vec![
            Record::new("월급", 2000000, "기타", "2025-06-25", EntryKind::Income),
            Record::new("김밥", 5000, "점심", "2025-06-01", EntryKind::Expense),
            Record::new("국수", 6000, "점심", "2025-07-01", EntryKind::Expense),
            Record::new("커피", 4500, "카페", "2025-06-02", EntryKind::Expense),
        ]
    }

    #[test]
    fn test_no_criteria_matches_everything() {
        let records = sample_ledger();
        let report = FilterReport::generate(&records, &RecordFilter::new());

        assert_eq!(report.total_income, 2000000);
        assert_eq!(report.total_expense, 15500);
        assert_eq!(report.expense_count, 3);
        assert!(!report.matched_empty);
    }

    #[test]
    fn test_month_filter_is_literal_prefix() {
        let records = sample_ledger();
        let report = FilterReport::generate(&records, &RecordFilter::new().month("2025-06"));

        assert_eq!(report.total_income, 2000000);
        assert_eq!(report.total_expense, 9500);
        assert_eq!(report.expense_count, 2);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let records = sample_ledger();
        let report = FilterReport::generate(&records, &RecordFilter::new().category("점심"));

        assert_eq!(report.total_income, 0);
        assert_eq!(report.total_expense, 11000);
        assert_eq!(report.expense_count, 2);
    }

    #[test]
    fn test_combined_filters() {
        let records = sample_ledger();
        let filter = RecordFilter::new().month("2025-06").category("점심");
        let report = FilterReport::generate(&records, &filter);

        assert_eq!(report.total_expense, 5000);
        assert_eq!(report.expense_count, 1);
    }

    #[test]
    fn test_scenario_unmatched_month() {
        let records = sample_ledger();
        let report = FilterReport::generate(&records, &RecordFilter::new().month("2099-01"));

        assert_eq!(
            report,
            FilterReport {
                total_income: 0,
                total_expense: 0,
                expense_count: 0,
                balance: 0,
                matched_empty: true,
            }
        );
    }

    #[test]
    fn test_empty_match_is_advisory_in_output() {
        let report = FilterReport::generate(&[], &RecordFilter::new());
        assert!(report.matched_empty);
        assert!(report
            .format_terminal()
            .contains("No records matched the given criteria."));
    }
}
