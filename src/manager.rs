//! The five context operations: save, checkpoint, handoff, status, and
//! log-decision.
//!
//! [`ContextManager`] is generic over its storage, environment, and clock so
//! every operation can run against [`MemoryStore`](crate::store::MemoryStore)
//! and [`FixedEnvironment`](crate::env::FixedEnvironment) in tests. Each
//! operation is one linear read-then-write: validation happens before any
//! write, and a failed write aborts the whole operation.

use crate::env::{Clock, EnvironmentInfo};
use crate::error::{ContextError, Result};
use crate::models::{
    checkpoint_id, Checkpoint, CurrentStateFields, DecisionEntry, DocKind, StatusReport,
};
use crate::render;
use crate::store::{DocumentStore, SnapshotStore};

/// Number of checkpoints listed by `status`.
pub const RECENT_CHECKPOINTS: usize = 5;

/// Description substituted when `save` is invoked without one, e.g. from a
/// pre-commit hook.
pub const AUTO_SAVE_DESCRIPTION: &str = "Context auto-saved via pre-commit hook";

/// Result of a `save`, for CLI confirmation output.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub description: String,
    pub branch: String,
    pub status: String,
}

/// Result of a `handoff`: the regenerated document plus the paste-ready
/// prompt the CLI echoes.
#[derive(Debug, Clone)]
pub struct HandoffOutcome {
    pub content: String,
    pub prompt: String,
}

pub struct ContextManager<S, E, C> {
    store: S,
    env: E,
    clock: C,
}

impl<S, E, C> ContextManager<S, E, C>
where
    S: DocumentStore + SnapshotStore,
    E: EnvironmentInfo,
    C: Clock,
{
    pub fn new(store: S, env: E, clock: C) -> Self {
        Self { store, env, clock }
    }

    /// Overwrite `current_state` and the overview with a fresh description,
    /// timestamp, and environment snapshot.
    pub fn save(&self, description: &str) -> Result<SaveOutcome> {
        let description = non_empty(description, "description")?;
        let at = self.clock.now();
        let git = self.env.git_info();

        self.store.write_document(
            DocKind::CurrentState,
            &render::current_state(description, at, &git),
        )?;
        self.store
            .write_document(DocKind::Overview, &render::overview(description, at, &git))?;

        tracing::debug!(branch = %git.branch, "context saved");
        Ok(SaveOutcome {
            description: description.to_string(),
            status: render::status_line(&git),
            branch: git.branch,
        })
    }

    /// Create one new immutable checkpoint record. Existing checkpoints are
    /// never touched; an identifier collision fails the operation.
    pub fn checkpoint(&self, description: &str) -> Result<Checkpoint> {
        let description = non_empty(description, "description")?;
        let at = self.clock.now();
        let git = self.env.git_info();
        let diff = self.env.diff_summary();

        let id = checkpoint_id(at, description);
        self.store
            .create_snapshot(&id, &render::checkpoint(description, at, &git, &diff))?;

        tracing::debug!(%id, "checkpoint created");
        Ok(Checkpoint {
            id,
            description: description.to_string(),
            branch: git.branch,
            created_at: at,
        })
    }

    /// Regenerate the handoff document from the latest `current_state`
    /// content. Pure rewrite: no new files, no clock reads, so repeated
    /// calls with unchanged state produce byte-identical output.
    pub fn handoff(&self) -> Result<HandoffOutcome> {
        let body = self
            .store
            .read_document(DocKind::CurrentState)?
            .unwrap_or_default();
        let fields = CurrentStateFields::parse(&body);

        let content = render::handoff(&fields);
        self.store.write_document(DocKind::Handoff, &content)?;

        Ok(HandoffOutcome {
            prompt: render::paste_prompt(&fields),
            content,
        })
    }

    /// Compose a read-only status report. Mutates nothing.
    pub fn status(&self) -> Result<StatusReport> {
        let git = self.env.git_info();
        let all = self.store.list_snapshots(None)?;
        let recent: Vec<String> = all.iter().take(RECENT_CHECKPOINTS).cloned().collect();

        let fields = match self.store.read_document(DocKind::CurrentState)? {
            Some(body) => CurrentStateFields::parse(&body),
            None => CurrentStateFields::default(),
        };
        let decision_count = self.store.read_decisions()?.len();

        Ok(StatusReport {
            status: render::status_line(&git),
            branch: git.branch,
            last_commit: git.last_commit,
            checkpoint_count: all.len(),
            recent_checkpoints: recent,
            latest_description: fields.description,
            last_saved: fields.updated_at,
            decision_count,
        })
    }

    /// Append one entry to the decision log. Prior entries never change.
    pub fn log_decision(&self, category: &str, text: &str) -> Result<DecisionEntry> {
        let category = non_empty(category, "category")?;
        let text = non_empty(text, "decision text")?;

        let entry = DecisionEntry::new(self.clock.now(), category, text);
        self.store.append_decision(&entry.render_line())?;

        tracing::debug!(category = %entry.category, "decision logged");
        Ok(entry)
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContextError::Validation(field));
    }
    Ok(trimmed)
}
