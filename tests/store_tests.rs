mod common;

use budget_insights::{
    errors::EntityKind, sample_data::sample_month, FinanceStore, InsightKind, NewBudget,
    NewCategory, NewTransaction, StoreError,
};
use common::{empty_store, month};

#[test]
fn add_then_remove_restores_prior_content_and_order() {
    let mut store = FinanceStore::with_sample_data(sample_month());
    let before = store.transactions().to_vec();

    let added = store.add_transaction(NewTransaction::new(
        -12.0,
        "2025-05-12",
        "Lunch",
        "food",
    ));
    assert_eq!(store.transactions().last(), Some(&added));

    let removed = store.remove_transaction(&added.id).expect("remove added transaction");
    assert_eq!(removed, added);
    assert_eq!(store.transactions(), before.as_slice());
}

#[test]
fn removing_from_the_middle_keeps_the_rest_in_order() {
    let mut store = FinanceStore::with_sample_data(sample_month());
    store.remove_transaction("5").unwrap();
    let ids: Vec<_> = store.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "6", "7", "8", "9", "10"]);
}

#[test]
fn update_on_unknown_id_is_reported_and_harmless() {
    let mut store = empty_store();
    let stray = NewTransaction::new(-1.0, "2025-05-01", "Stray", "food").with_id("missing");
    let err = store.update_transaction(stray).unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            kind: EntityKind::Transaction,
            id: "missing".into()
        }
    );
    assert_eq!(err.to_string(), "Transaction not found: missing");
    assert!(store.transactions().is_empty());
}

#[test]
fn budgets_support_full_crud() {
    let mut store = empty_store();
    let created = store.add_budget(NewBudget::new("food", 400.0, month("2025-05")));
    assert_eq!(store.budget_for("food", &month("2025-05")), Some(&created));
    assert!(store.budget_for("food", &month("2025-06")).is_none());

    let mut raised = created.clone();
    raised.amount = 500.0;
    store.update_budget(raised).unwrap();
    assert_eq!(store.budget(&created.id).map(|b| b.amount), Some(500.0));

    store.remove_budget(&created.id).unwrap();
    assert!(store.budgets().is_empty());
}

#[test]
fn categories_can_be_added_and_renamed() {
    let mut store = empty_store();
    let created = store.add_category(NewCategory::new("Pets", "chart-4", "paw"));
    assert_eq!(store.categories().len(), 4);

    let mut renamed = created.clone();
    renamed.name = "Pet Care".into();
    store.update_category(renamed).unwrap();
    assert_eq!(store.category(&created.id).map(|c| c.name.as_str()), Some("Pet Care"));
}

#[test]
fn month_changes_recompute_insights() {
    let mut store = FinanceStore::with_sample_data(sample_month());
    assert!(!store.insights().is_empty());
    assert!(store
        .insights()
        .iter()
        .any(|insight| insight.kind == InsightKind::Success));

    store.set_month(month("2025-04"));
    assert!(store.insights().is_empty());
    assert_eq!(store.expense_total(), 0.0);

    store.set_month(sample_month());
    assert!(!store.insights().is_empty());
}

#[test]
fn category_edits_flow_into_insight_names() {
    let mut store = FinanceStore::with_sample_data(sample_month());
    let mut housing = store.category("housing").cloned().unwrap();
    housing.name = "Rent".into();
    store.update_category(housing).unwrap();
    assert!(store
        .insights()
        .iter()
        .any(|insight| insight.message == "Your highest spending category is Rent ($1,200.00)."));
}

#[test]
fn sample_month_insights_match_the_dashboard() {
    let store = FinanceStore::with_sample_data(sample_month());
    let messages: Vec<_> = store.insights().iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "You're well under your Food & Dining budget ($104.50 of $400.00).",
            "You're well under your Transportation budget ($45.50 of $200.00).",
            "You're well under your Entertainment budget ($25.99 of $150.00).",
            "You're well under your Utilities budget ($120.45 of $250.00).",
            "You're well under your Shopping budget ($89.99 of $200.00).",
            "You're well under your Healthcare budget ($65.00 of $150.00).",
            "You're well under your Education budget ($35.50 of $100.00).",
            "You're well under your Personal budget ($22.50 of $100.00).",
            "You're well under your Other budget ($0.00 of $100.00).",
            "Your highest spending category is Housing ($1,200.00).",
            "Housing makes up 70% of your monthly expenses.",
        ]
    );
}
