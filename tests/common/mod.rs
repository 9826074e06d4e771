#![allow(dead_code)]

use budget_insights::{
    Budget, Category, FinanceStore, MonthKey, NewBudget, NewCategory, NewTransaction, Transaction,
};

pub fn month(raw: &str) -> MonthKey {
    raw.parse().expect("valid month")
}

pub fn expense(id: &str, amount: f64, date: &str, category_id: &str) -> Transaction {
    NewTransaction::new(-amount.abs(), date, format!("expense {id}"), category_id).with_id(id)
}

pub fn income(id: &str, amount: f64, date: &str) -> Transaction {
    NewTransaction::new(amount.abs(), date, format!("income {id}"), "salary").with_id(id)
}

pub fn budget(id: &str, category_id: &str, amount: f64, raw_month: &str) -> Budget {
    NewBudget::new(category_id, amount, month(raw_month)).with_id(id)
}

pub fn categories() -> Vec<Category> {
    vec![
        NewCategory::new("Housing", "chart-1", "home").with_id("housing"),
        NewCategory::new("Food & Dining", "chart-2", "utensils").with_id("food"),
        NewCategory::new("Transportation", "chart-3", "car").with_id("transportation"),
    ]
}

/// A store on May 2025 with the fixture categories and nothing else.
pub fn empty_store() -> FinanceStore {
    FinanceStore::from_parts(Vec::new(), categories(), Vec::new(), month("2025-05"))
}
