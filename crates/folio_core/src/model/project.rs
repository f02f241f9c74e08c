//! Project domain record.
//!
//! # Responsibility
//! - Define the portfolio project entry shown as a card and as a detail view.
//!
//! # Invariants
//! - `id` is stable and unique across the store.
//! - `categories` is non-empty (enforced by `ContentStore::new`).
//! - `content` order is the authored display order.

use crate::model::category::Category;
use crate::model::content::ContentBlock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier for a project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = u32;

/// One portfolio project, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Short card text shown in the project grid.
    pub preview: String,
    /// Optional card image path; cards without one fall back to a category
    /// placeholder glyph.
    pub preview_image: Option<String>,
    pub ongoing: bool,
    /// Optional external repository link.
    pub repo_link: Option<String>,
    /// Ordered detail-view body.
    pub content: Vec<ContentBlock>,
    /// Membership tags used by the filter; non-empty.
    pub categories: Vec<Category>,
}

impl Project {
    /// Returns whether this project carries at least one of `selected`.
    ///
    /// A project with no categories never matches a non-empty selection.
    pub fn matches_any(&self, selected: &BTreeSet<Category>) -> bool {
        self.categories.iter().any(|c| selected.contains(c))
    }
}
