use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by context-keeper operations.
///
/// Three kinds cover everything: a filesystem read/write failed (with the
/// offending path), a required argument was empty (raised before any write),
/// or a requested checkpoint does not exist.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("cannot {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} must not be empty")]
    Validation(&'static str),

    #[error("checkpoint not found: {0}")]
    NotFound(String),
}

impl ContextError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;
