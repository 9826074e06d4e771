use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a generated spending insight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Info,
    Warning,
    Success,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsightKind::Info => "info",
            InsightKind::Warning => "warning",
            InsightKind::Success => "success",
        };
        f.write_str(label)
    }
}

/// An advisory message derived from a month of spending. Never stored on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendingInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub message: String,
}

impl SpendingInsight {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Warning,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: InsightKind::Success,
            message: message.into(),
        }
    }
}
