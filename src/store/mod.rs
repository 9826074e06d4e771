//! The single owned store behind the dashboard.
//!
//! Every collection keeps insertion order. The insight list is rebuilt from
//! scratch after each successful mutation, so [`FinanceStore::insights`]
//! always matches the current transactions, budgets, categories, and month.

mod collection;

use chrono::NaiveDate;

use crate::core::services::{
    BudgetComparison, ChartEntry, InsightRules, InsightService, MonthlyPoint, SummaryService,
};
use crate::domain::{
    common::find_by_id, Budget, Category, MonthKey, NewBudget, NewCategory, NewTransaction,
    SpendingInsight, Transaction,
};
use crate::errors::{EntityKind, StoreError};
use crate::sample_data;

use self::collection::{fresh_id, replace, take};

#[derive(Debug, Clone)]
pub struct FinanceStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    budgets: Vec<Budget>,
    current_month: MonthKey,
    rules: InsightRules,
    insights: Vec<SpendingInsight>,
}

impl FinanceStore {
    /// An empty store reporting on `month`.
    pub fn new(month: MonthKey) -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), month)
    }

    pub fn from_parts(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        budgets: Vec<Budget>,
        month: MonthKey,
    ) -> Self {
        let mut store = Self {
            transactions,
            categories,
            budgets,
            current_month: month,
            rules: InsightRules::default(),
            insights: Vec::new(),
        };
        store.refresh_insights();
        store
    }

    /// A store seeded with the default categories and the sample month.
    pub fn with_sample_data(month: MonthKey) -> Self {
        Self::from_parts(
            sample_data::sample_transactions(),
            sample_data::default_categories(),
            sample_data::sample_budgets(),
            month,
        )
    }

    pub fn with_rules(mut self, rules: InsightRules) -> Self {
        self.set_rules(rules);
        self
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn current_month(&self) -> &MonthKey {
        &self.current_month
    }

    pub fn rules(&self) -> &InsightRules {
        &self.rules
    }

    pub fn insights(&self) -> &[SpendingInsight] {
        &self.insights
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        find_by_id(&self.budgets, id)
    }

    /// The budget for `category_id` in `month`, if one was set.
    pub fn budget_for(&self, category_id: &str, month: &MonthKey) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.category_id == category_id && budget.month == *month)
    }

    pub fn add_transaction(&mut self, draft: NewTransaction) -> Transaction {
        let record = draft.with_id(fresh_id(&self.transactions));
        tracing::debug!(id = %record.id, amount = record.amount, "adding transaction");
        self.transactions.push(record.clone());
        self.refresh_insights();
        record
    }

    pub fn update_transaction(&mut self, record: Transaction) -> Result<(), StoreError> {
        let id = record.id.clone();
        self.apply(|store| replace(&mut store.transactions, record, EntityKind::Transaction))
            .map_err(|err| log_missing(err, &id))
    }

    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction, StoreError> {
        self.apply(|store| take(&mut store.transactions, id, EntityKind::Transaction))
            .map_err(|err| log_missing(err, id))
    }

    pub fn add_budget(&mut self, draft: NewBudget) -> Budget {
        let record = draft.with_id(fresh_id(&self.budgets));
        tracing::debug!(id = %record.id, category = %record.category_id, month = %record.month, "adding budget");
        self.budgets.push(record.clone());
        self.refresh_insights();
        record
    }

    pub fn update_budget(&mut self, record: Budget) -> Result<(), StoreError> {
        let id = record.id.clone();
        self.apply(|store| replace(&mut store.budgets, record, EntityKind::Budget))
            .map_err(|err| log_missing(err, &id))
    }

    pub fn remove_budget(&mut self, id: &str) -> Result<Budget, StoreError> {
        self.apply(|store| take(&mut store.budgets, id, EntityKind::Budget))
            .map_err(|err| log_missing(err, id))
    }

    pub fn add_category(&mut self, draft: NewCategory) -> Category {
        let record = draft.with_id(fresh_id(&self.categories));
        tracing::debug!(id = %record.id, name = %record.name, "adding category");
        self.categories.push(record.clone());
        self.refresh_insights();
        record
    }

    pub fn update_category(&mut self, record: Category) -> Result<(), StoreError> {
        let id = record.id.clone();
        self.apply(|store| replace(&mut store.categories, record, EntityKind::Category))
            .map_err(|err| log_missing(err, &id))
    }

    /// Removes the category only; transactions and budgets keep their dangling id.
    pub fn remove_category(&mut self, id: &str) -> Result<Category, StoreError> {
        self.apply(|store| take(&mut store.categories, id, EntityKind::Category))
            .map_err(|err| log_missing(err, id))
    }

    /// Selects the reporting month. Callers keep it at or before the current month.
    pub fn set_month(&mut self, month: MonthKey) {
        tracing::debug!(month = %month, "reporting month selected");
        self.current_month = month;
        self.refresh_insights();
    }

    pub fn previous_month(&mut self) {
        self.set_month(self.current_month.previous());
    }

    /// Whether moving forward would stay at or before `today`'s month.
    pub fn can_advance(&self, today: NaiveDate) -> bool {
        self.current_month.next() <= MonthKey::from_date(today)
    }

    /// Advances one month unless that would pass `today`'s month; reports whether it moved.
    pub fn next_month(&mut self, today: NaiveDate) -> bool {
        if !self.can_advance(today) {
            tracing::warn!(month = %self.current_month, "refusing to navigate past the current month");
            return false;
        }
        self.set_month(self.current_month.next());
        true
    }

    pub fn set_rules(&mut self, rules: InsightRules) {
        self.rules = rules;
        self.refresh_insights();
    }

    pub fn expense_total(&self) -> f64 {
        SummaryService::monthly_expense_total(&self.transactions, &self.current_month)
    }

    pub fn category_breakdown(&self) -> Vec<ChartEntry> {
        SummaryService::category_breakdown(
            &self.transactions,
            &self.categories,
            &self.current_month,
        )
    }

    pub fn budget_vs_actual(&self) -> Vec<BudgetComparison> {
        SummaryService::budget_vs_actual(
            &self.transactions,
            &self.budgets,
            &self.categories,
            &self.current_month,
        )
    }

    /// Expense trend ending at the selected month.
    pub fn monthly_series(&self, months_back: usize) -> Vec<MonthlyPoint> {
        SummaryService::monthly_series(&self.transactions, months_back, &self.current_month)
    }

    fn apply<T, F>(&mut self, mutation: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, StoreError>,
    {
        let outcome = mutation(self)?;
        self.refresh_insights();
        Ok(outcome)
    }

    fn refresh_insights(&mut self) {
        self.insights = InsightService::generate(
            &self.transactions,
            &self.budgets,
            &self.categories,
            &self.current_month,
            &self.rules,
        );
    }
}

fn log_missing(err: StoreError, id: &str) -> StoreError {
    tracing::warn!(id, error = %err, "store mutation skipped");
    err
}
