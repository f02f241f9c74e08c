//! Content store: validated, immutable site data.
//!
//! # Responsibility
//! - Own the static content payload and its id lookups.
//! - Validate referential integrity once, at construction.
//!
//! # Invariants
//! - A store that constructs successfully never yields a dangling
//!   `ProjectLink` or a project with an empty category set.

pub mod content_store;
pub mod seed;
