//! Static reference data that transactions and budgets point at.

use serde::{Deserialize, Serialize};

use crate::domain::common::{find_by_id, Identifiable};

/// Display name used when a category id cannot be resolved.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
/// Color token used when a category id cannot be resolved.
pub const DEFAULT_CATEGORY_COLOR: &str = "chart-5";

/// Categorises spending for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    /// Resolves `id` to `(name, color)`, falling back to the unknown-category tokens.
    pub fn display_parts<'a>(categories: &'a [Category], id: &str) -> (&'a str, &'a str) {
        match find_by_id(categories, id) {
            Some(category) => (category.name.as_str(), category.color.as_str()),
            None => (UNKNOWN_CATEGORY_NAME, DEFAULT_CATEGORY_COLOR),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Category fields supplied by the caller before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Category {
        Category {
            id: id.into(),
            name: self.name,
            color: self.color,
            icon: self.icon,
        }
    }
}
