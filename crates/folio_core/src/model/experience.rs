//! Work-experience domain record.
//!
//! # Responsibility
//! - Define the experience entry shown as a card and as a detail view.
//! - Carry optional links into the project list.
//!
//! # Invariants
//! - `id` is stable and unique across the store.
//! - Every `ProjectLink.project_id` resolves to a stored project
//!   (enforced by `ContentStore::new`).

use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};

/// Stable identifier for an experience entry.
pub type ExperienceId = u32;

/// Labelled reference from an experience to a related project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub project_id: ProjectId,
    /// Display name of the link button.
    pub label: String,
}

impl ProjectLink {
    pub fn new(project_id: ProjectId, label: impl Into<String>) -> Self {
        Self {
            project_id,
            label: label.into(),
        }
    }
}

/// One work-experience entry, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub organization: String,
    /// Display string, e.g. "May 2021 - May 2022"; never parsed.
    pub period: String,
    /// Short card text shown in the experience list.
    pub preview: String,
    /// Ordered achievement bullet lines.
    pub achievements: Vec<String>,
    /// Optional organization logo path.
    pub logo: Option<String>,
    /// Related-project buttons shown on the card.
    pub project_links: Vec<ProjectLink>,
}
