//! Project category filter.
//!
//! # Responsibility
//! - Compute the subset of projects matching a selected tag set.
//!
//! # Invariants
//! - Pure and idempotent; safe to run on every render.
//! - Original relative order is always preserved.
//! - Selection semantics are OR across tags, not AND.

use crate::model::category::Category;
use crate::model::project::Project;
use std::collections::BTreeSet;

/// Returns the projects matching `selected`, in original order.
///
/// An empty selection is the identity: every project passes. Otherwise a
/// project passes when its category set intersects `selected`; a project
/// without categories never matches a non-empty selection.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    selected: &BTreeSet<Category>,
) -> Vec<&'a Project> {
    if selected.is_empty() {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|project| project.matches_any(selected))
        .collect()
}
