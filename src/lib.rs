#![doc(test(attr(deny(warnings))))]

//! Budget Insights keeps transactions, categories, and monthly budgets in
//! memory and derives the summaries a finance dashboard needs: monthly totals,
//! category breakdowns, budget-vs-actual pairs, and rule-based spending
//! insights.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod sample_data;
pub mod store;
pub mod utils;

pub use crate::core::services::{InsightService, SummaryService, TransactionService};
pub use crate::domain::{
    Budget, Category, InsightKind, MonthKey, NewBudget, NewCategory, NewTransaction,
    SpendingInsight, Transaction,
};
pub use crate::errors::StoreError;
pub use crate::store::FinanceStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Insights tracing initialized.");
    });
}
