use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{DocumentStore, SnapshotStore};
use crate::error::{ContextError, Result};
use crate::models::DocKind;

/// In-memory store mirroring [`FsStore`](super::FsStore) semantics.
///
/// Used as the injected fake in unit tests so operations run without
/// touching disk. Snapshot identifier collisions fail the same way the
/// filesystem store fails.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<DocKind, String>>,
    decisions: Mutex<Vec<String>>,
    snapshots: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattened view of every document, decision, and snapshot, for
    /// before/after comparisons in read-only tests.
    pub fn dump(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for (kind, content) in self.documents.lock().expect("store lock poisoned").iter() {
            out.push((format!("doc:{}", kind.as_str()), content.clone()));
        }
        for (i, line) in self
            .decisions
            .lock()
            .expect("store lock poisoned")
            .iter()
            .enumerate()
        {
            out.push((format!("decision:{i}"), line.clone()));
        }
        for (id, payload) in self.snapshots.lock().expect("store lock poisoned").iter() {
            out.push((format!("snapshot:{id}"), payload.clone()));
        }
        out
    }
}

impl DocumentStore for MemoryStore {
    fn read_document(&self, kind: DocKind) -> Result<Option<String>> {
        Ok(self
            .documents
            .lock()
            .expect("store lock poisoned")
            .get(&kind)
            .cloned())
    }

    fn write_document(&self, kind: DocKind, content: &str) -> Result<()> {
        self.documents
            .lock()
            .expect("store lock poisoned")
            .insert(kind, content.to_string());
        Ok(())
    }

    fn append_decision(&self, line: &str) -> Result<()> {
        self.decisions
            .lock()
            .expect("store lock poisoned")
            .push(line.to_string());
        Ok(())
    }

    fn read_decisions(&self) -> Result<Vec<String>> {
        Ok(self.decisions.lock().expect("store lock poisoned").clone())
    }
}

impl SnapshotStore for MemoryStore {
    fn create_snapshot(&self, id: &str, payload: &str) -> Result<()> {
        let mut snapshots = self.snapshots.lock().expect("store lock poisoned");
        if snapshots.contains_key(id) {
            return Err(ContextError::io(
                "create",
                PathBuf::from(format!("{id}.md")),
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "snapshot exists"),
            ));
        }
        snapshots.insert(id.to_string(), payload.to_string());
        Ok(())
    }

    fn list_snapshots(&self, limit: Option<usize>) -> Result<Vec<String>> {
        let snapshots = self.snapshots.lock().expect("store lock poisoned");
        let mut ids: Vec<String> = snapshots.keys().rev().cloned().collect();
        if let Some(limit) = limit {
            ids.truncate(limit);
        }
        Ok(ids)
    }

    fn read_snapshot(&self, id: &str) -> Result<String> {
        self.snapshots
            .lock()
            .expect("store lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| ContextError::NotFound(id.to_string()))
    }
}
