//! Pure aggregations that fold a month of transactions into chart-ready rows.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::currency::whole_percent;
use crate::domain::{
    common::find_by_id, Budget, Category, MonthKey, Transaction, UNKNOWN_CATEGORY_NAME,
};

/// One slice of the category pie chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartEntry {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// One bar of the monthly expense trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    pub label: String,
    pub value: f64,
}

/// Budget and actual spend for one category in one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetComparison {
    pub category_id: String,
    pub category_name: String,
    pub budget_amount: f64,
    pub actual_amount: f64,
}

impl BudgetComparison {
    pub fn is_over_budget(&self) -> bool {
        self.actual_amount > self.budget_amount
    }
}

/// Income, expenses, and what is left over for a month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

/// All budgets of a month measured against the month's expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_expenses: f64,
    pub remaining: f64,
    pub percent_used: i64,
}

/// Progress of a single budget, as listed on the budget page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetProgress {
    pub budget_id: String,
    pub category_id: String,
    pub category_name: String,
    pub budget_amount: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: i64,
}

impl BudgetProgress {
    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget_amount
    }
}

/// Accumulated outflow for one category id.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category_id: String,
    pub amount: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sum of absolute values of the month's negative-amount transactions.
    pub fn monthly_expense_total(transactions: &[Transaction], month: &MonthKey) -> f64 {
        month_transactions(transactions, month)
            .map(Transaction::outflow)
            .sum()
    }

    /// Sum of the month's positive-amount transactions.
    pub fn monthly_income_total(transactions: &[Transaction], month: &MonthKey) -> f64 {
        month_transactions(transactions, month)
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn monthly_summary(transactions: &[Transaction], month: &MonthKey) -> MonthlySummary {
        let income = Self::monthly_income_total(transactions, month);
        let expenses = Self::monthly_expense_total(transactions, month);
        MonthlySummary {
            month: month.clone(),
            income,
            expenses,
            savings: income - expenses,
        }
    }

    /// Month outflow grouped by category id, in first-seen transaction order.
    pub fn spending_by_category(
        transactions: &[Transaction],
        month: &MonthKey,
    ) -> Vec<CategorySpend> {
        let mut groups: Vec<CategorySpend> = Vec::new();
        for txn in month_transactions(transactions, month).filter(|txn| txn.is_expense()) {
            match groups
                .iter_mut()
                .find(|group| group.category_id == txn.category_id)
            {
                Some(group) => group.amount += txn.outflow(),
                None => groups.push(CategorySpend {
                    category_id: txn.category_id.clone(),
                    amount: txn.outflow(),
                }),
            }
        }
        groups
    }

    /// Expenses per category, highest first. Unknown ids render as `Unknown`.
    pub fn category_breakdown(
        transactions: &[Transaction],
        categories: &[Category],
        month: &MonthKey,
    ) -> Vec<ChartEntry> {
        let mut entries: Vec<ChartEntry> = Self::spending_by_category(transactions, month)
            .into_iter()
            .map(|spend| {
                let (name, color) = Category::display_parts(categories, &spend.category_id);
                ChartEntry {
                    name: name.to_string(),
                    value: spend.amount,
                    color: color.to_string(),
                }
            })
            .collect();
        entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        entries
    }

    /// Expense totals for `months_back` months ending at `anchor`, oldest first.
    pub fn monthly_series(
        transactions: &[Transaction],
        months_back: usize,
        anchor: &MonthKey,
    ) -> Vec<MonthlyPoint> {
        (0..months_back)
            .rev()
            .map(|offset| {
                let month = anchor.shift(-(offset as i32));
                MonthlyPoint {
                    label: month.short_label().to_string(),
                    value: Self::monthly_expense_total(transactions, &month),
                    month,
                }
            })
            .collect()
    }

    /// Budget and actual spend per category for the month.
    ///
    /// Rows follow category order; a category appears when it has a budget for
    /// the month or nonzero spend. Budgets and spend whose category id does not
    /// resolve are appended afterwards under the `Unknown` name.
    pub fn budget_vs_actual(
        transactions: &[Transaction],
        budgets: &[Budget],
        categories: &[Category],
        month: &MonthKey,
    ) -> Vec<BudgetComparison> {
        let spending = Self::spending_by_category(transactions, month);
        let spent_on = |category_id: &str| {
            spending
                .iter()
                .find(|spend| spend.category_id == category_id)
                .map_or(0.0, |spend| spend.amount)
        };
        let budgeted_for = |category_id: &str| {
            budgets
                .iter()
                .find(|budget| budget.category_id == category_id && budget.month == *month)
                .map_or(0.0, |budget| budget.amount)
        };

        let mut rows: Vec<BudgetComparison> = categories
            .iter()
            .map(|category| BudgetComparison {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                budget_amount: budgeted_for(&category.id),
                actual_amount: spent_on(&category.id),
            })
            .collect();

        let dangling = budgets
            .iter()
            .filter(|budget| budget.month == *month)
            .map(|budget| budget.category_id.as_str())
            .chain(spending.iter().map(|spend| spend.category_id.as_str()))
            .filter(|id| find_by_id(categories, id).is_none());
        for id in dangling {
            if rows.iter().any(|row| row.category_id == id) {
                continue;
            }
            rows.push(BudgetComparison {
                category_id: id.to_string(),
                category_name: UNKNOWN_CATEGORY_NAME.to_string(),
                budget_amount: budgeted_for(id),
                actual_amount: spent_on(id),
            });
        }

        rows.retain(|row| row.budget_amount > 0.0 || row.actual_amount > 0.0);
        rows
    }

    pub fn budget_overview(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: &MonthKey,
    ) -> BudgetOverview {
        let total_budget: f64 = budgets
            .iter()
            .filter(|budget| budget.month == *month)
            .map(|budget| budget.amount)
            .sum();
        let total_expenses = Self::monthly_expense_total(transactions, month);
        BudgetOverview {
            total_budget,
            total_expenses,
            remaining: total_budget - total_expenses,
            percent_used: whole_percent(share_of(total_expenses, total_budget)),
        }
    }

    /// One row per budget of the month, ordered by category name.
    pub fn budget_progress(
        transactions: &[Transaction],
        budgets: &[Budget],
        categories: &[Category],
        month: &MonthKey,
    ) -> Vec<BudgetProgress> {
        let spending = Self::spending_by_category(transactions, month);
        let mut rows: Vec<BudgetProgress> = budgets
            .iter()
            .filter(|budget| budget.month == *month)
            .map(|budget| {
                let spent = spending
                    .iter()
                    .find(|spend| spend.category_id == budget.category_id)
                    .map_or(0.0, |spend| spend.amount);
                let (name, _) = Category::display_parts(categories, &budget.category_id);
                BudgetProgress {
                    budget_id: budget.id.clone(),
                    category_id: budget.category_id.clone(),
                    category_name: name.to_string(),
                    budget_amount: budget.amount,
                    spent,
                    remaining: budget.amount - spent,
                    percent_used: whole_percent(share_of(spent, budget.amount)),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        rows
    }

    /// Categories that do not yet have a budget for the month.
    pub fn unbudgeted_categories<'a>(
        budgets: &[Budget],
        categories: &'a [Category],
        month: &MonthKey,
    ) -> Vec<&'a Category> {
        categories
            .iter()
            .filter(|category| {
                !budgets
                    .iter()
                    .any(|budget| budget.category_id == category.id && budget.month == *month)
            })
            .collect()
    }
}

/// `part / whole`, defined as `0` when `whole` is zero.
pub fn share_of(part: f64, whole: f64) -> f64 {
    if whole.abs() < f64::EPSILON {
        0.0
    } else {
        part / whole
    }
}

pub(crate) fn month_transactions<'a, 'm>(
    transactions: &'a [Transaction],
    month: &'m MonthKey,
) -> impl Iterator<Item = &'a Transaction> + 'm
where
    'a: 'm,
{
    transactions.iter().filter(move |txn| month.contains(&txn.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewBudget, NewCategory, NewTransaction};

    fn month(raw: &str) -> MonthKey {
        raw.parse().unwrap()
    }

    fn txn(id: &str, amount: f64, date: &str, category: &str) -> Transaction {
        NewTransaction::new(amount, date, format!("txn {id}"), category).with_id(id)
    }

    fn categories() -> Vec<Category> {
        vec![
            NewCategory::new("Housing", "chart-1", "home").with_id("housing"),
            NewCategory::new("Food & Dining", "chart-2", "utensils").with_id("food"),
            NewCategory::new("Travel", "chart-3", "plane").with_id("travel"),
        ]
    }

    #[test]
    fn expense_total_is_zero_for_empty_month() {
        let transactions = vec![txn("1", -10.0, "2025-04-30", "food")];
        assert_eq!(
            SummaryService::monthly_expense_total(&transactions, &month("2025-05")),
            0.0
        );
    }

    #[test]
    fn expense_total_ignores_income() {
        let mut transactions = vec![
            txn("1", -10.0, "2025-05-01", "food"),
            txn("2", -2.5, "2025-05-31", "housing"),
        ];
        let before = SummaryService::monthly_expense_total(&transactions, &month("2025-05"));
        transactions.push(txn("3", 5000.0, "2025-05-15", "other"));
        let after = SummaryService::monthly_expense_total(&transactions, &month("2025-05"));
        assert_eq!(before, 12.5);
        assert_eq!(after, before);
    }

    #[test]
    fn breakdown_sorts_descending_and_falls_back_for_unknown() {
        let transactions = vec![
            txn("1", -20.0, "2025-05-01", "food"),
            txn("2", -1200.0, "2025-05-01", "housing"),
            txn("3", -30.0, "2025-05-02", "ghost"),
            txn("4", -15.0, "2025-05-03", "food"),
            txn("5", 100.0, "2025-05-03", "food"),
        ];
        let breakdown =
            SummaryService::category_breakdown(&transactions, &categories(), &month("2025-05"));
        let names: Vec<_> = breakdown.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food & Dining", "Unknown"]);
        assert_eq!(breakdown[1].value, 35.0);
        assert_eq!(breakdown[2].color, "chart-5");

        let total: f64 = breakdown.iter().map(|e| e.value).sum();
        assert_eq!(
            total,
            SummaryService::monthly_expense_total(&transactions, &month("2025-05"))
        );
    }

    #[test]
    fn series_is_oldest_first_and_spans_years() {
        let transactions = vec![
            txn("1", -10.0, "2024-12-05", "food"),
            txn("2", -20.0, "2025-02-05", "food"),
        ];
        let series = SummaryService::monthly_series(&transactions, 3, &month("2025-02"));
        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        let values: Vec<_> = series.iter().map(|p| p.value).collect();
        assert_eq!(labels, vec!["Dec", "Jan", "Feb"]);
        assert_eq!(values, vec![10.0, 0.0, 20.0]);
        assert!(SummaryService::monthly_series(&transactions, 0, &month("2025-02")).is_empty());
    }

    #[test]
    fn budget_vs_actual_omits_rows_with_nothing_to_show() {
        let may = month("2025-05");
        let transactions = vec![
            txn("1", -50.0, "2025-05-02", "food"),
            txn("2", -70.0, "2025-05-02", "ghost"),
        ];
        let budgets = vec![
            NewBudget::new("housing", 1500.0, may.clone()).with_id("b1"),
            NewBudget::new("travel", 300.0, month("2025-04")).with_id("b2"),
        ];
        let rows =
            SummaryService::budget_vs_actual(&transactions, &budgets, &categories(), &may);
        let ids: Vec<_> = rows.iter().map(|r| r.category_id.as_str()).collect();
        assert_eq!(ids, vec!["housing", "food", "ghost"]);
        assert_eq!(rows[0].actual_amount, 0.0);
        assert_eq!(rows[1].budget_amount, 0.0);
        assert_eq!(rows[2].category_name, "Unknown");
        assert!(rows[2].is_over_budget());
        assert!(rows
            .iter()
            .all(|r| r.budget_amount > 0.0 || r.actual_amount > 0.0));
    }

    #[test]
    fn overview_guards_zero_budget() {
        let may = month("2025-05");
        let transactions = vec![txn("1", -50.0, "2025-05-02", "food")];
        let overview = SummaryService::budget_overview(&transactions, &[], &may);
        assert_eq!(overview.percent_used, 0);
        assert_eq!(overview.remaining, -50.0);
    }

    #[test]
    fn progress_rows_sorted_by_category_name() {
        let may = month("2025-05");
        let transactions = vec![txn("1", -450.0, "2025-05-02", "food")];
        let budgets = vec![
            NewBudget::new("travel", 200.0, may.clone()).with_id("b1"),
            NewBudget::new("food", 400.0, may.clone()).with_id("b2"),
        ];
        let rows = SummaryService::budget_progress(&transactions, &budgets, &categories(), &may);
        assert_eq!(rows[0].category_name, "Food & Dining");
        assert_eq!(rows[0].percent_used, 113);
        assert!(rows[0].is_over_budget());
        assert_eq!(rows[1].remaining, 200.0);
    }

    #[test]
    fn unbudgeted_categories_skip_existing_budgets() {
        let may = month("2025-05");
        let budgets = vec![NewBudget::new("food", 400.0, may.clone()).with_id("b1")];
        let cats = categories();
        let open = SummaryService::unbudgeted_categories(&budgets, &cats, &may);
        let ids: Vec<_> = open.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["housing", "travel"]);
    }

    #[test]
    fn share_of_never_divides_by_zero() {
        assert_eq!(share_of(10.0, 0.0), 0.0);
        assert_eq!(share_of(0.0, 0.0), 0.0);
        assert_eq!(share_of(5.0, 10.0), 0.5);
    }
}
