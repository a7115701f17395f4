//! Per-category spending breakdown
//!
//! Expense totals grouped by category, restricted to categories that
//! actually appear. Entries keep the first-seen order of categories among
//! expense records: stable grouping, not sorted.

use crate::models::Record;

/// One category's expense total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category leaf name
    pub category: String,
    /// Summed expense amount
    pub spent: i64,
}

/// Expense totals per category in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    /// Generate the breakdown over all expense records
    pub fn generate(records: &[Record]) -> Self {
        let mut entries: Vec<CategoryTotal> = Vec::new();

        for record in records.iter().filter(|r| r.is_expense()) {
            match entries.iter_mut().find(|e| e.category == record.category) {
                Some(entry) => entry.spent += record.amount,
                None => entries.push(CategoryTotal {
                    category: record.category.clone(),
                    spent: record.amount,
                }),
            }
        }

        Self { entries }
    }

    /// Sum of all per-category totals (equals the ledger's total expense)
    pub fn total_spent(&self) -> i64 {
        self.entries.iter().map(|e| e.spent).sum()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("[Spending by Category]\n");
        for entry in &self.entries {
            output.push_str(&format!("- {}: {}원\n", entry.category, entry.spent));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;
    use crate::reports::LedgerSummary;

    fn expense(name: &str, amount: i64, category: &str, date: &str) -> Record {
        Record::new(name, amount, category, date, EntryKind::Expense)
    }

    #[test]
    fn test_empty_ledger() {
        let breakdown = CategoryBreakdown::generate(&[]);
        assert!(breakdown.entries.is_empty());
        assert_eq!(breakdown.total_spent(), 0);
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let records = vec![
            expense("김밥", 5000, "점심", "2025-06-01"),
            expense("커피", 4500, "카페", "2025-06-01"),
            expense("비빔밥", 9000, "점심", "2025-06-02"),
        ];

        let breakdown = CategoryBreakdown::generate(&records);
        assert_eq!(
            breakdown.entries,
            vec![
                CategoryTotal {
                    category: "점심".into(),
                    spent: 14000
                },
                CategoryTotal {
                    category: "카페".into(),
                    spent: 4500
                },
            ]
        );
    }

    #[test]
    fn test_income_is_excluded() {
        let records = vec![
            Record::new("월급", 2000000, "기타", "2025-06-25", EntryKind::Income),
            expense("잡화", 3000, "잡화", "2025-06-03"),
        ];

        let breakdown = CategoryBreakdown::generate(&records);
        assert_eq!(breakdown.entries.len(), 1);
        assert_eq!(breakdown.entries[0].category, "잡화");
    }

    #[test]
    fn test_total_matches_ledger_expense() {
        let records = vec![
            Record::new("용돈", 30000, "기타", "2025-06-01", EntryKind::Income),
            expense("버스", 1500, "버스", "2025-06-01"),
            expense("저녁", 12000, "저녁", "2025-06-01"),
            expense("버스", 1500, "버스", "2025-06-02"),
        ];

        let breakdown = CategoryBreakdown::generate(&records);
        let summary = LedgerSummary::generate(&records);
        assert_eq!(breakdown.total_spent(), summary.total_expense);
    }
}
