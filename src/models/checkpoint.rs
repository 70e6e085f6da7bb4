use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable, timestamped snapshot of project status.
///
/// Checkpoints are append-only: once written they are never mutated or
/// deleted by the tool. The identifier doubles as the snapshot file stem and
/// sorts lexicographically in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    pub description: String,
    pub branch: String,
    pub created_at: DateTime<Utc>,
}

/// Timestamp format used in checkpoint identifiers. Lexicographic order of
/// the rendered prefix equals chronological order.
pub const CHECKPOINT_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// Build a checkpoint identifier from its creation time and description.
/// Descriptions with no alphanumeric content yield a bare timestamp.
pub fn checkpoint_id(at: DateTime<Utc>, description: &str) -> String {
    let ts = at.format(CHECKPOINT_TIMESTAMP);
    let slug = slugify(description);
    if slug.is_empty() {
        ts.to_string()
    } else {
        format!("{ts}_{slug}")
    }
}

/// Lowercase the description and collapse every run of non-alphanumeric
/// characters into a single underscore.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}
