//! Session context and handoff tracking for AI-assisted development.
//!
//! context-keeper maintains a `.context/` directory of human-readable
//! markdown documents alongside a project checkout:
//!
//! - mutable state documents (overview, current state, summary, handoff)
//!   rewritten in place by [`ContextManager::save`] and
//!   [`ContextManager::handoff`]
//! - an append-only decision log
//! - a `checkpoints/` directory of immutable, timestamp-named snapshots
//!
//! Everything is plain text; the filesystem is the only persistence layer.
//! Storage and environment reads are injected behind small traits so the
//! operations are unit-testable without a real checkout (see
//! [`store::MemoryStore`] and [`env::FixedEnvironment`]).

pub mod env;
pub mod error;
pub mod manager;
pub mod models;
pub mod render;
pub mod store;

pub use error::{ContextError, Result};
pub use manager::ContextManager;
