//! Rule-based spending advice for a single month.

use serde::{Deserialize, Serialize};

use crate::core::services::summary_service::{share_of, SummaryService};
use crate::currency::{format_currency, format_percent};
use crate::domain::{common::find_by_id, Budget, Category, MonthKey, SpendingInsight, Transaction};

/// Thresholds that decide which insights fire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsightRules {
    /// Spend above this fraction of a budget (but not over it) is "approaching".
    pub approaching_ratio: f64,
    /// Spend below this fraction of a budget is "well under".
    pub well_under_ratio: f64,
    /// A category above this share of the month's spend gets a concentration note.
    pub concentration_share: f64,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            approaching_ratio: 0.9,
            well_under_ratio: 0.5,
            concentration_share: 0.4,
        }
    }
}

pub struct InsightService;

impl InsightService {
    /// Builds the month's insights: budget checks in budget order, then the
    /// highest spending category, then every category above the concentration
    /// share. The same inputs always produce the same list.
    pub fn generate(
        transactions: &[Transaction],
        budgets: &[Budget],
        categories: &[Category],
        month: &MonthKey,
        rules: &InsightRules,
    ) -> Vec<SpendingInsight> {
        let spending = SummaryService::spending_by_category(transactions, month);
        let total_spending: f64 = spending.iter().map(|spend| spend.amount).sum();
        let spent_on = |category_id: &str| {
            spending
                .iter()
                .find(|spend| spend.category_id == category_id)
                .map_or(0.0, |spend| spend.amount)
        };

        let mut insights: Vec<SpendingInsight> = budgets
            .iter()
            .filter(|budget| budget.month == *month)
            .filter_map(|budget| {
                Self::budget_insight(budget, spent_on(&budget.category_id), categories, rules)
            })
            .collect();

        let mut highest: Option<(&str, f64)> = None;
        for spend in &spending {
            if spend.amount > highest.map_or(0.0, |(_, amount)| amount) {
                highest = Some((spend.category_id.as_str(), spend.amount));
            }
        }
        if let Some((category_id, amount)) = highest {
            if let Some(category) = find_by_id(categories, category_id) {
                insights.push(SpendingInsight::info(format!(
                    "Your highest spending category is {} ({}).",
                    category.name,
                    format_currency(amount)
                )));
            }
        }

        if total_spending > 0.0 {
            for spend in &spending {
                let share = share_of(spend.amount, total_spending);
                if share <= rules.concentration_share {
                    continue;
                }
                if let Some(category) = find_by_id(categories, &spend.category_id) {
                    insights.push(SpendingInsight::info(format!(
                        "{} makes up {} of your monthly expenses.",
                        category.name,
                        format_percent(share)
                    )));
                }
            }
        }

        tracing::debug!(month = %month, count = insights.len(), "generated spending insights");
        insights
    }

    fn budget_insight(
        budget: &Budget,
        spent: f64,
        categories: &[Category],
        rules: &InsightRules,
    ) -> Option<SpendingInsight> {
        let name = find_by_id(categories, &budget.category_id)
            .map_or(budget.category_id.as_str(), |category| category.name.as_str());
        let limit = budget.amount;
        if spent > limit {
            Some(SpendingInsight::warning(format!(
                "You've exceeded your {} budget by {}.",
                name,
                format_currency(spent - limit)
            )))
        } else if spent > limit * rules.approaching_ratio {
            Some(SpendingInsight::info(format!(
                "You're approaching your {} budget ({} of {}).",
                name,
                format_currency(spent),
                format_currency(limit)
            )))
        } else if spent < limit * rules.well_under_ratio {
            Some(SpendingInsight::success(format!(
                "You're well under your {} budget ({} of {}).",
                name,
                format_currency(spent),
                format_currency(limit)
            )))
        } else {
            None
        }
    }
}
