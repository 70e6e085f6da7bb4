use serde::Serialize;

/// Read-only summary assembled by [`ContextManager::status`](crate::ContextManager::status).
///
/// Everything here is derived from the store and the environment; producing
/// a report never mutates any document or checkpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub branch: String,
    pub status: String,
    pub last_commit: String,
    /// Total number of checkpoints in the snapshot store.
    pub checkpoint_count: usize,
    /// Bounded list of checkpoint identifiers, most recent first.
    pub recent_checkpoints: Vec<String>,
    /// Description from the latest `save`, if any.
    pub latest_description: Option<String>,
    /// Timestamp line from the latest `save`, if any.
    pub last_saved: Option<String>,
    pub decision_count: usize,
}
