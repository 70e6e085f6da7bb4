use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{DocumentStore, SnapshotStore};
use crate::error::{ContextError, Result};
use crate::models::DocKind;

/// Directory created under the project root.
pub const CONTEXT_DIR: &str = ".context";

const CHECKPOINTS_DIR: &str = "checkpoints";
const DECISIONS_LOG: &str = "decisions.log";
const SNAPSHOT_EXT: &str = "md";

/// Filesystem-backed store rooted at `<project_root>/.context`.
///
/// All content is plain text. Snapshot files are named by their identifier,
/// so directory listing order (sorted) equals creation order.
pub struct FsStore {
    context_dir: PathBuf,
    checkpoints_dir: PathBuf,
}

impl FsStore {
    /// Opens the context directory under `project_root`, creating it and the
    /// checkpoints directory if needed.
    pub fn open(project_root: impl AsRef<Path>) -> Result<Self> {
        let context_dir = project_root.as_ref().join(CONTEXT_DIR);
        let checkpoints_dir = context_dir.join(CHECKPOINTS_DIR);
        fs::create_dir_all(&checkpoints_dir)
            .map_err(|e| ContextError::io("create directory", &checkpoints_dir, e))?;
        Ok(Self {
            context_dir,
            checkpoints_dir,
        })
    }

    pub fn context_dir(&self) -> &Path {
        &self.context_dir
    }

    pub fn document_path(&self, kind: DocKind) -> PathBuf {
        self.context_dir.join(kind.file_name())
    }

    fn decisions_path(&self) -> PathBuf {
        self.context_dir.join(DECISIONS_LOG)
    }

    fn snapshot_path(&self, id: &str) -> PathBuf {
        self.checkpoints_dir.join(format!("{id}.{SNAPSHOT_EXT}"))
    }
}

impl DocumentStore for FsStore {
    fn read_document(&self, kind: DocKind) -> Result<Option<String>> {
        let path = self.document_path(kind);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContextError::io("read", path, e)),
        }
    }

    fn write_document(&self, kind: DocKind, content: &str) -> Result<()> {
        let path = self.document_path(kind);
        fs::write(&path, content).map_err(|e| ContextError::io("write", path, e))
    }

    fn append_decision(&self, line: &str) -> Result<()> {
        let path = self.decisions_path();
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| ContextError::io("open", &path, e))?;
        writeln!(file, "{line}").map_err(|e| ContextError::io("append to", path, e))
    }

    fn read_decisions(&self) -> Result<Vec<String>> {
        let path = self.decisions_path();
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ContextError::io("read", path, e)),
        }
    }
}

impl SnapshotStore for FsStore {
    fn create_snapshot(&self, id: &str, payload: &str) -> Result<()> {
        let path = self.snapshot_path(id);
        // create_new refuses to overwrite, which enforces append-only
        // semantics on identifier collision.
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| ContextError::io("create", &path, e))?;
        file.write_all(payload.as_bytes())
            .map_err(|e| ContextError::io("write", path, e))
    }

    fn list_snapshots(&self, limit: Option<usize>) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.checkpoints_dir)
            .map_err(|e| ContextError::io("read directory", &self.checkpoints_dir, e))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| ContextError::io("read directory", &self.checkpoints_dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(SNAPSHOT_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        ids.reverse();
        if let Some(limit) = limit {
            ids.truncate(limit);
        }
        Ok(ids)
    }

    fn read_snapshot(&self, id: &str) -> Result<String> {
        let path = self.snapshot_path(id);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(payload),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ContextError::NotFound(id.to_string()))
            }
            Err(e) => Err(ContextError::io("read", path, e)),
        }
    }
}
