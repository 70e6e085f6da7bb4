//! Domain models for context-keeper.
//!
//! # Core Concepts
//!
//! ## Mutable State Documents
//!
//! - [`DocKind`]: the fixed set of named markdown documents under
//!   `.context/`. Rewritten in place by `save` and `handoff`, never deleted.
//! - [`CurrentStateFields`]: structured fields parsed back out of the
//!   rendered `current_state` document.
//!
//! ## Append-Only Records
//!
//! - [`Checkpoint`]: immutable timestamped snapshot; its identifier sorts
//!   lexicographically in creation order.
//! - [`DecisionEntry`]: one line in the decision log; prior entries never
//!   change.
//!
//! [`StatusReport`] is a read-only view composed from both plus the
//! version-control environment.

mod checkpoint;
mod decision;
mod document;
mod status;

pub use checkpoint::*;
pub use decision::*;
pub use document::*;
pub use status::*;
