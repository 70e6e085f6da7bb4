//! Persistence for state documents, the decision log, and checkpoint
//! snapshots.
//!
//! Two traits split the concerns: [`DocumentStore`] covers the mutable
//! markdown documents plus the append-only decision log, [`SnapshotStore`]
//! covers immutable checkpoint records. [`FsStore`] implements both over a
//! `.context/` directory; [`MemoryStore`] mirrors the same semantics in
//! memory for tests.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::DocKind;

/// Storage for the mutable state documents and the decision log.
pub trait DocumentStore {
    /// `Ok(None)` when the document has never been written.
    fn read_document(&self, kind: DocKind) -> Result<Option<String>>;

    /// Overwrites the document in place.
    fn write_document(&self, kind: DocKind, content: &str) -> Result<()>;

    /// Appends one rendered entry line; prior entries are never touched.
    fn append_decision(&self, line: &str) -> Result<()>;

    /// All decision lines in append order. Empty when nothing was logged.
    fn read_decisions(&self) -> Result<Vec<String>>;
}

/// Append-only storage of checkpoint snapshots.
///
/// Identifiers sort lexicographically in creation order, so listing is a
/// sort, not a timestamp parse.
pub trait SnapshotStore {
    /// Fails with an IO error if `id` already exists.
    fn create_snapshot(&self, id: &str, payload: &str) -> Result<()>;

    /// Identifiers most recent first, bounded by `limit` when given.
    fn list_snapshots(&self, limit: Option<usize>) -> Result<Vec<String>>;

    /// Fails with [`ContextError::NotFound`](crate::ContextError::NotFound)
    /// for unknown identifiers.
    fn read_snapshot(&self, id: &str) -> Result<String>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn read_document(&self, kind: DocKind) -> Result<Option<String>> {
        (**self).read_document(kind)
    }

    fn write_document(&self, kind: DocKind, content: &str) -> Result<()> {
        (**self).write_document(kind, content)
    }

    fn append_decision(&self, line: &str) -> Result<()> {
        (**self).append_decision(line)
    }

    fn read_decisions(&self) -> Result<Vec<String>> {
        (**self).read_decisions()
    }
}

impl<T: SnapshotStore + ?Sized> SnapshotStore for &T {
    fn create_snapshot(&self, id: &str, payload: &str) -> Result<()> {
        (**self).create_snapshot(id, payload)
    }

    fn list_snapshots(&self, limit: Option<usize>) -> Result<Vec<String>> {
        (**self).list_snapshots(limit)
    }

    fn read_snapshot(&self, id: &str) -> Result<String> {
        (**self).read_snapshot(id)
    }
}
