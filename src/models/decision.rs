use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the append-only decision log.
///
/// Entries are immutable once written. The category is uppercased on
/// construction so the log scans uniformly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionEntry {
    pub logged_at: DateTime<Utc>,
    pub category: String,
    pub text: String,
}

impl DecisionEntry {
    pub fn new(logged_at: DateTime<Utc>, category: &str, text: &str) -> Self {
        Self {
            logged_at,
            category: category.to_uppercase(),
            text: text.to_string(),
        }
    }

    /// Render as a single log line: `[2026-08-23 10:00:00] [ARCH] text`.
    pub fn render_line(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.logged_at.format("%Y-%m-%d %H:%M:%S"),
            self.category,
            self.text
        )
    }
}
