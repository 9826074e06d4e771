//! Read-side helpers for listing and searching transactions.

use crate::core::services::summary_service::month_transactions;
use crate::domain::{common::find_by_id, Category, MonthKey, Transaction};

/// Query helpers over a transaction slice.
pub struct TransactionService;

impl TransactionService {
    /// Transactions whose date falls in `month`, in stored order.
    pub fn for_month<'a>(transactions: &'a [Transaction], month: &MonthKey) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| month.contains(&txn.date))
            .collect()
    }

    pub fn for_category<'a>(
        transactions: &'a [Transaction],
        category_id: &str,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.category_id == category_id)
            .collect()
    }

    /// Month transactions matching `query` against the description or the
    /// category name, case-insensitively, newest first. A blank query keeps all.
    pub fn search<'a>(
        transactions: &'a [Transaction],
        categories: &[Category],
        month: &MonthKey,
        query: &str,
    ) -> Vec<&'a Transaction> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<&Transaction> = month_transactions(transactions, month)
            .filter(|txn| {
                if needle.is_empty() {
                    return true;
                }
                if txn.description.to_lowercase().contains(&needle) {
                    return true;
                }
                find_by_id(categories, &txn.category_id)
                    .map_or(false, |category| category.name.to_lowercase().contains(&needle))
            })
            .collect();
        sort_newest_first(&mut matches);
        matches
    }

    /// The `limit` most recent transactions of the month.
    pub fn recent<'a>(
        transactions: &'a [Transaction],
        month: &MonthKey,
        limit: usize,
    ) -> Vec<&'a Transaction> {
        let mut items = Self::for_month(transactions, month);
        sort_newest_first(&mut items);
        items.truncate(limit);
        items
    }
}

// ISO dates order lexically; the sort is stable so same-day entries keep insertion order.
fn sort_newest_first(items: &mut [&Transaction]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}
