pub mod insight_service;
pub mod summary_service;
pub mod transaction_service;

pub use insight_service::{InsightRules, InsightService};
pub use summary_service::{
    share_of, BudgetComparison, BudgetOverview, BudgetProgress, CategorySpend, ChartEntry,
    MonthlyPoint, MonthlySummary, SummaryService,
};
pub use transaction_service::TransactionService;
