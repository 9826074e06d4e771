//! Dated, signed money movements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// A single transaction. Negative amounts are expenses, positive amounts income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub description: String,
    pub category_id: String,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Absolute outflow, or zero for income.
    pub fn outflow(&self) -> f64 {
        if self.is_expense() {
            self.amount.abs()
        } else {
            0.0
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Transaction fields supplied by the caller before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: f64,
    pub date: String,
    pub description: String,
    pub category_id: String,
}

impl NewTransaction {
    pub fn new(
        amount: f64,
        date: impl Into<String>,
        description: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date: date.into(),
            description: description.into(),
            category_id: category_id.into(),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Transaction {
        Transaction {
            id: id.into(),
            amount: self.amount,
            date: self.date,
            description: self.description,
            category_id: self.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outflow_ignores_income() {
        let expense = NewTransaction::new(-12.5, "2025-05-01", "Lunch", "food").with_id("a");
        let income = NewTransaction::new(900.0, "2025-05-01", "Salary", "other").with_id("b");
        assert!(expense.is_expense());
        assert_eq!(expense.outflow(), 12.5);
        assert!(income.is_income());
        assert_eq!(income.outflow(), 0.0);
    }

    #[test]
    fn parsed_date_tolerates_garbage() {
        let txn = NewTransaction::new(-1.0, "not-a-date", "x", "food").with_id("a");
        assert!(txn.parsed_date().is_none());
        let txn = NewTransaction::new(-1.0, "2025-05-03", "x", "food").with_id("b");
        assert_eq!(txn.parsed_date(), NaiveDate::from_ymd_opt(2025, 5, 3));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let txn = NewTransaction::new(-1.0, "2025-05-03", "x", "food").with_id("b");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["categoryId"], "food");
    }
}
