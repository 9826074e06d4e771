use serde::{Deserialize, Serialize};

use crate::domain::{common::Identifiable, month::MonthKey};

/// A spending ceiling for one category in one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub amount: f64,
    pub month: MonthKey,
}

impl Identifiable for Budget {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: String,
    pub amount: f64,
    pub month: MonthKey,
}

impl NewBudget {
    pub fn new(category_id: impl Into<String>, amount: f64, month: MonthKey) -> Self {
        Self {
            category_id: category_id.into(),
            amount,
            month,
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Budget {
        Budget {
            id: id.into(),
            category_id: self.category_id,
            amount: self.amount,
            month: self.month,
        }
    }
}
