//! Whole-ledger summary
//!
//! Total income, total expense, and the resulting balance.

use crate::models::Record;

/// Income/expense totals over the full ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    /// Sum of income amounts
    pub total_income: i64,
    /// Sum of expense amounts
    pub total_expense: i64,
    /// `total_income - total_expense`
    pub balance: i64,
}

impl LedgerSummary {
    /// Generate the summary; an empty ledger yields all zeros
    pub fn generate(records: &[Record]) -> Self {
        let total_income: i64 = records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();
        let total_expense: i64 = records
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum();

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("[Ledger Summary]\n");
        output.push_str(&format!("- Total income:  {}원\n", self.total_income));
        output.push_str(&format!("- Total expense: {}원\n", self.total_expense));
        output.push_str(&format!("- Balance:       {}원\n", self.balance));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    #[test]
    fn test_empty_ledger_is_all_zeros() {
        let summary = LedgerSummary::generate(&[]);
        assert_eq!(
            summary,
            LedgerSummary {
                total_income: 0,
                total_expense: 0,
                balance: 0
            }
        );
    }

    #[test]
    fn test_totals_split_by_kind() {
        let records = vec![
            Record::new("월급", 2000000, "기타", "2025-06-25", EntryKind::Income),
            Record::new("점심", 8000, "점심", "2025-06-01", EntryKind::Expense),
            Record::new("커피", 4500, "카페", "2025-06-01", EntryKind::Expense),
        ];

        let summary = LedgerSummary::generate(&records);
        assert_eq!(summary.total_income, 2000000);
        assert_eq!(summary.total_expense, 12500);
        assert_eq!(summary.balance, 1987500);
    }

    #[test]
    fn test_balance_invariant() {
        let records = vec![
            Record::new("용돈", 50000, "기타", "2025-06-05", EntryKind::Income),
            Record::new("택시", 12000, "택시", "2025-06-06", EntryKind::Expense),
        ];

        let summary = LedgerSummary::generate(&records);
        assert_eq!(summary.balance, summary.total_income - summary.total_expense);
    }
}
