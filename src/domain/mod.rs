//! Domain records held by the store and produced by the services.

pub mod budget;
pub mod category;
pub mod common;
pub mod insight;
pub mod month;
pub mod transaction;

pub use budget::{Budget, NewBudget};
pub use category::{Category, NewCategory, DEFAULT_CATEGORY_COLOR, UNKNOWN_CATEGORY_NAME};
pub use common::Identifiable;
pub use insight::{InsightKind, SpendingInsight};
pub use month::MonthKey;
pub use transaction::{NewTransaction, Transaction};
