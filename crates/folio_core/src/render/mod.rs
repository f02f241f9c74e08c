//! Content rendering into view descriptors.
//!
//! # Responsibility
//! - Map content blocks and navigation state to a serializable descriptor
//!   tree consumed by an external rendering surface.
//!
//! # Invariants
//! - The core emits descriptors only; it never touches pixels or widgets.
//! - Asset paths pass through unvalidated; resolution failures are the
//!   asset host's concern.
//! - An unresolved detail id renders an explicit not-found page, never
//!   partial content.

pub mod blocks;
pub mod pages;
pub mod view;
