//! Seed data for a freshly opened dashboard.

use crate::domain::{Budget, Category, MonthKey, NewBudget, NewCategory, NewTransaction, Transaction};

/// The month the sample transactions and budgets fall in.
pub const SAMPLE_MONTH: &str = "2025-05";
const SAMPLE_YEAR: i32 = 2025;
const SAMPLE_MONTH_NUMBER: u32 = 5;

const CATEGORIES: [(&str, &str, &str, &str); 10] = [
    ("housing", "Housing", "chart-1", "home"),
    ("food", "Food & Dining", "chart-2", "utensils"),
    ("transportation", "Transportation", "chart-3", "car"),
    ("entertainment", "Entertainment", "chart-4", "film"),
    ("utilities", "Utilities", "chart-5", "zap"),
    ("shopping", "Shopping", "chart-1", "shopping-bag"),
    ("healthcare", "Healthcare", "chart-2", "heart"),
    ("personal", "Personal", "chart-3", "user"),
    ("education", "Education", "chart-4", "book"),
    ("other", "Other", "chart-5", "more-horizontal"),
];

const TRANSACTIONS: [(&str, f64, &str, &str, &str); 10] = [
    ("1", -1200.0, "2025-05-01", "Monthly rent", "housing"),
    ("2", -85.75, "2025-05-03", "Grocery shopping", "food"),
    ("3", -45.50, "2025-05-05", "Gas station", "transportation"),
    ("4", -25.99, "2025-05-08", "Movie tickets", "entertainment"),
    ("5", -120.45, "2025-05-10", "Electricity bill", "utilities"),
    ("6", -89.99, "2025-05-15", "New shoes", "shopping"),
    ("7", -65.00, "2025-05-18", "Doctor visit", "healthcare"),
    ("8", -35.50, "2025-05-20", "Books", "education"),
    ("9", -22.50, "2025-05-22", "Haircut", "personal"),
    ("10", -18.75, "2025-05-25", "Coffee shop", "food"),
];

const BUDGETS: [(&str, &str, f64); 10] = [
    ("1", "housing", 1500.0),
    ("2", "food", 400.0),
    ("3", "transportation", 200.0),
    ("4", "entertainment", 150.0),
    ("5", "utilities", 250.0),
    ("6", "shopping", 200.0),
    ("7", "healthcare", 150.0),
    ("8", "education", 100.0),
    ("9", "personal", 100.0),
    ("10", "other", 100.0),
];

pub fn sample_month() -> MonthKey {
    MonthKey::from_parts(SAMPLE_YEAR, SAMPLE_MONTH_NUMBER)
}

pub fn default_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, color, icon)| NewCategory::new(*name, *color, *icon).with_id(*id))
        .collect()
}

pub fn sample_transactions() -> Vec<Transaction> {
    TRANSACTIONS
        .iter()
        .map(|(id, amount, date, description, category)| {
            NewTransaction::new(*amount, *date, *description, *category).with_id(*id)
        })
        .collect()
}

pub fn sample_budgets() -> Vec<Budget> {
    let month = sample_month();
    BUDGETS
        .iter()
        .map(|(id, category, amount)| NewBudget::new(*category, *amount, month.clone()).with_id(*id))
        .collect()
}
