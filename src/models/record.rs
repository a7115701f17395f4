//! Ledger record model
//!
//! A record is one income or expense entry. Records carry no identity
//! field; their position in the ledger sequence is their only handle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog;

/// Direction of a ledger entry
///
/// Serialized with the document's literal labels, which predate this
/// implementation and must round-trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Money in
    #[serde(rename = "수입")]
    Income,
    /// Money out
    #[serde(rename = "지출")]
    Expense,
}

impl EntryKind {
    /// Check if this is an expense entry
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    /// Check if this is an income entry
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "수입"),
            Self::Expense => write!(f, "지출"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Item name
    pub name: String,

    /// Amount as a non-negative magnitude; sign is implied by `kind`
    pub amount: i64,

    /// Leaf category name from the catalog
    pub category: String,

    /// Entry date in `YYYY-MM-DD` shape (lexical only, never
    /// calendar-checked)
    pub date: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Record {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        date: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            date: date.into(),
            kind,
        }
    }

    /// Check if this record is an expense
    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Check if this record is an income
    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Validate the record for entry
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.amount < 1 {
            return Err(RecordValidationError::NonPositiveAmount(self.amount));
        }

        if !catalog::is_leaf(&self.category) {
            return Err(RecordValidationError::UnknownCategory(
                self.category.clone(),
            ));
        }

        if !is_date_shaped(&self.date) {
            return Err(RecordValidationError::MalformedDate(self.date.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}원 {} {} {}",
            self.name, self.amount, self.category, self.date, self.kind
        )
    }
}

/// Check that a string has the lexical `YYYY-MM-DD` shape.
///
/// Calendar validity is deliberately not checked; "2025-02-30" passes.
pub fn is_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveAmount(i64),
    UnknownCategory(String),
    MalformedDate(String),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive integer, got {}", amount)
            }
            Self::UnknownCategory(category) => {
                write!(f, "Category '{}' is not in the catalog", category)
            }
            Self::MalformedDate(date) => {
                write!(f, "Date '{}' does not match YYYY-MM-DD", date)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = Record::new("점심 식사", 8000, "점심", "2025-06-01", EntryKind::Expense);
        assert_eq!(record.amount, 8000);
        assert!(record.is_expense());
        assert!(!record.is_income());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_amount_validation() {
        let record = Record::new("환불", 0, "점심", "2025-06-01", EntryKind::Income);
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::NonPositiveAmount(0))
        );

        let record = Record::new("환불", -500, "점심", "2025-06-01", EntryKind::Income);
        assert!(matches!(
            record.validate(),
            Err(RecordValidationError::NonPositiveAmount(-500))
        ));
    }

    #[test]
    fn test_category_validation() {
        let record = Record::new("월세", 500000, "월세", "2025-06-01", EntryKind::Expense);
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::UnknownCategory("월세".into()))
        );

        // Group names are not selectable leaves
        let record = Record::new("장보기", 30000, "식비", "2025-06-01", EntryKind::Expense);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_date_shape() {
        assert!(is_date_shaped("2025-06-01"));
        // Lexical only: calendar-invalid dates pass
        assert!(is_date_shaped("2025-02-30"));
        assert!(is_date_shaped("2025-13-99"));

        assert!(!is_date_shaped("2025-6-1"));
        assert!(!is_date_shaped("2025/06/01"));
        assert!(!is_date_shaped("20250601"));
        assert!(!is_date_shaped("2025-06-01 "));
        assert!(!is_date_shaped(""));
    }

    #[test]
    fn test_date_validation() {
        let record = Record::new("커피", 4500, "카페", "2025-6-1", EntryKind::Expense);
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::MalformedDate("2025-6-1".into()))
        );
    }

    #[test]
    fn test_serialization_labels() {
        let record = Record::new("월급", 2000000, "기타", "2025-06-25", EntryKind::Income);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"수입\""));

        let deserialized: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_deserialization_from_document_shape() {
        let json = r#"{
            "name": "버스 요금",
            "amount": 1500,
            "category": "버스",
            "date": "2025-06-03",
            "type": "지출"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, EntryKind::Expense);
        assert_eq!(record.category, "버스");
    }

    #[test]
    fn test_display() {
        let record = Record::new("택시비", 9000, "택시", "2025-06-01", EntryKind::Expense);
        assert_eq!(format!("{}", record), "택시비 9000원 택시 2025-06-01 지출");
    }
}
