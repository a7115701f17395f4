//! Savings challenge
//!
//! Classifies each day that has at least one expense as a success (daily
//! expense sum at or under the threshold) or a failure. Days are grouped
//! by the exact date string; days with no expenses do not appear.

use crate::models::Record;

/// Default daily spending ceiling for the challenge, in won
pub const DEFAULT_DAILY_THRESHOLD: i64 = 10_000;

/// Outcome of the savings challenge over the full ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsChallenge {
    /// Threshold the days were classified against
    pub threshold: i64,
    /// Days whose expense sum stayed at or under the threshold
    pub success_count: usize,
    /// Days whose expense sum exceeded the threshold
    pub failure_count: usize,
    /// Successful dates in first-seen order
    pub success_dates: Vec<String>,
}

impl SavingsChallenge {
    /// Generate the challenge result
    pub fn generate(records: &[Record], threshold: i64) -> Self {
        // Daily sums in first-seen date order
        let mut daily: Vec<(String, i64)> = Vec::new();
        for record in records.iter().filter(|r| r.is_expense()) {
            match daily.iter_mut().find(|(date, _)| *date == record.date) {
                Some((_, sum)) => *sum += record.amount,
                None => daily.push((record.date.clone(), record.amount)),
            }
        }

        let mut success_dates = Vec::new();
        let mut failure_count = 0;
        for (date, sum) in daily {
            if sum <= threshold {
                success_dates.push(date);
            } else {
                failure_count += 1;
            }
        }

        Self {
            threshold,
            success_count: success_dates.len(),
            failure_count,
            success_dates,
        }
    }

    /// Format the challenge result for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "[Savings Challenge: {}원/day]\n",
            self.threshold
        ));
        output.push_str(&format!("- Successful days: {}\n", self.success_count));
        output.push_str(&format!("- Failed days:     {}\n", self.failure_count));
        if !self.success_dates.is_empty() {
            output.push_str(&format!(
                "- Success dates:   {}\n",
                self.success_dates.join(", ")
            ));
        }
        output
    }
}
