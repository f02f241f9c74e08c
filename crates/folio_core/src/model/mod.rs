//! Domain model for the portfolio content core.
//!
//! # Responsibility
//! - Define the canonical records rendered by the site: profile, projects,
//!   work experience, and the tagged content blocks composing detail views.
//!
//! # Invariants
//! - Every record is identified by a stable integer id assigned in the seed.
//! - Records are immutable after the content store is constructed.
//! - `ContentBlock` is a closed sum type; renderer dispatch over it is
//!   exhaustive and checked at compile time.

pub mod category;
pub mod content;
pub mod experience;
pub mod profile;
pub mod project;
