//! Plain-text dashboard rendering for the reporting binary.

use std::fmt::{self, Write as _};

use colored::Colorize;

use crate::config::Config;
use crate::core::services::{SummaryService, TransactionService};
use crate::currency::{format_currency_value, format_date};
use crate::domain::{common::find_by_id, InsightKind, SpendingInsight, Transaction};
use crate::store::FinanceStore;

const RECENT_LIMIT: usize = 5;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Info,
    Success,
    Warning,
}

/// Renders store snapshots as terminal text.
pub struct Formatter<'a> {
    config: &'a Config,
    plain_mode: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(config: &'a Config, plain_mode: bool) -> Self {
        Self { config, plain_mode }
    }

    /// The full dashboard for the store's selected month.
    pub fn dashboard(&self, store: &FinanceStore) -> String {
        let month = store.current_month();
        let transactions = store.transactions();
        let summary = SummaryService::monthly_summary(transactions, month);
        let overview = SummaryService::budget_overview(transactions, store.budgets(), month);

        let mut out = String::new();
        self.header(&mut out, format!("Dashboard: {}", month.long_label()));
        let cards = [
            ("Monthly Expenses", self.money(summary.expenses)),
            ("Monthly Income", self.money(summary.income)),
            (
                "Budget Remaining",
                format!(
                    "{} ({}% of budget used)",
                    self.money(overview.remaining),
                    overview.percent_used
                ),
            ),
            ("Monthly Savings", self.money(summary.savings)),
        ];
        self.two_column(&mut out, &cards);

        self.header(&mut out, "Recent Transactions");
        let recent = TransactionService::recent(transactions, month, RECENT_LIMIT);
        if recent.is_empty() {
            let _ = writeln!(out, "  No transactions for this month.");
        } else {
            let rows: Vec<(&str, String)> = recent
                .iter()
                .map(|transaction| {
                    (
                        transaction.description.as_str(),
                        self.transaction_detail(transaction, store),
                    )
                })
                .collect();
            self.two_column(&mut out, &rows);
        }

        self.header(&mut out, "Spending by Category");
        let entries = store.category_breakdown();
        if entries.is_empty() {
            let _ = writeln!(out, "  No expenses recorded this month.");
        } else {
            let rows: Vec<(&str, String)> = entries
                .iter()
                .map(|entry| (entry.name.as_str(), self.money(entry.value)))
                .collect();
            self.two_column(&mut out, &rows);
        }

        self.header(&mut out, "Budget vs Actual");
        let comparisons = store.budget_vs_actual();
        if comparisons.is_empty() {
            let _ = writeln!(out, "  No budgets or spending this month.");
        } else {
            let rows: Vec<(&str, String)> = comparisons
                .iter()
                .map(|row| {
                    let marker = if row.is_over_budget() { " over" } else { "" };
                    (
                        row.category_name.as_str(),
                        format!(
                            "{} of {}{}",
                            self.money(row.actual_amount),
                            self.money(row.budget_amount),
                            marker
                        ),
                    )
                })
                .collect();
            self.two_column(&mut out, &rows);
        }

        self.header(&mut out, "Monthly Expenses");
        let series = store.monthly_series(self.config.trend_months);
        let rows: Vec<(&str, String)> = series
            .iter()
            .map(|point| (point.label.as_str(), self.money(point.value)))
            .collect();
        self.two_column(&mut out, &rows);

        self.header(&mut out, "Insights");
        if store.insights().is_empty() {
            let _ = writeln!(out, "  Add transactions and budgets to see insights.");
        }
        for insight in store.insights() {
            let _ = writeln!(out, "  {}", self.insight_line(insight));
        }
        out
    }

    pub fn insight_line(&self, insight: &SpendingInsight) -> String {
        let (icon, label, style) = match insight.kind {
            InsightKind::Warning => ("⚠", "WARNING:", Style::Warning),
            InsightKind::Success => ("✔", "OK:", Style::Success),
            InsightKind::Info => ("ℹ", "INFO:", Style::Info),
        };
        if self.plain_mode {
            format!("{label} {}", insight.message)
        } else {
            self.colorize(format!("{icon} {}", insight.message), style)
        }
    }

    // Date, category badge (only when it resolves), then the signed amount.
    fn transaction_detail(&self, transaction: &Transaction, store: &FinanceStore) -> String {
        let date = transaction
            .parsed_date()
            .map(format_date)
            .unwrap_or_else(|| transaction.date.clone());
        let mut detail = date;
        if let Some(category) = find_by_id(store.categories(), &transaction.category_id) {
            let _ = write!(detail, "  [{}]", category.name);
        }
        let style = if transaction.is_expense() {
            Style::Warning
        } else {
            Style::Success
        };
        let amount = self.colorize(self.money(transaction.amount), style);
        let _ = write!(detail, "  {}", amount);
        detail
    }

    fn money(&self, amount: f64) -> String {
        format_currency_value(amount, &self.config.currency, &self.config.locale)
    }

    fn header(&self, out: &mut String, title: impl fmt::Display) {
        let text = format!("=== {} ===", title);
        let _ = writeln!(out, "\n{}", self.colorize(text, Style::Header));
    }

    fn two_column(&self, out: &mut String, entries: &[(&str, String)]) {
        let label_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        for (label, value) in entries {
            let _ = writeln!(out, "  {:<width$}  {}", label, value, width = label_width + 2);
        }
    }

    fn colorize(&self, text: String, style: Style) -> String {
        if self.plain_mode {
            return text;
        }
        match style {
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Header => text.bold().to_string(),
            Style::Info => text,
        }
    }
}
