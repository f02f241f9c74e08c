//! Validated in-memory content store.
//!
//! # Responsibility
//! - Hold profile, project, and experience records for the session.
//! - Provide id lookups for detail-view resolution.
//!
//! # Invariants
//! - Ids are unique per record kind.
//! - Every project carries at least one category.
//! - Every experience project link resolves to a stored project.

use crate::model::experience::{Experience, ExperienceId};
use crate::model::profile::Profile;
use crate::model::project::{Project, ProjectId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Construction-time validation error for site content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateProject(ProjectId),
    DuplicateExperience(ExperienceId),
    /// A project was seeded with an empty category set.
    EmptyCategories(ProjectId),
    /// An experience references a project id that does not exist.
    DanglingProjectLink {
        experience: ExperienceId,
        project: ProjectId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateProject(id) => write!(f, "duplicate project id: {id}"),
            Self::DuplicateExperience(id) => write!(f, "duplicate experience id: {id}"),
            Self::EmptyCategories(id) => {
                write!(f, "project {id} has no categories")
            }
            Self::DanglingProjectLink {
                experience,
                project,
            } => write!(
                f,
                "experience {experience} links to unknown project {project}"
            ),
        }
    }
}

impl Error for StoreError {}

/// Immutable site content, constructed once at startup.
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
}

impl ContentStore {
    /// Builds a store after validating id uniqueness, category presence,
    /// and project-link referential integrity.
    pub fn new(
        profile: Profile,
        projects: Vec<Project>,
        experiences: Vec<Experience>,
    ) -> Result<Self, StoreError> {
        let mut project_ids = BTreeSet::new();
        for project in &projects {
            if !project_ids.insert(project.id) {
                return Err(StoreError::DuplicateProject(project.id));
            }
            if project.categories.is_empty() {
                return Err(StoreError::EmptyCategories(project.id));
            }
        }

        let mut experience_ids = BTreeSet::new();
        for experience in &experiences {
            if !experience_ids.insert(experience.id) {
                return Err(StoreError::DuplicateExperience(experience.id));
            }
            for link in &experience.project_links {
                if !project_ids.contains(&link.project_id) {
                    return Err(StoreError::DanglingProjectLink {
                        experience: experience.id,
                        project: link.project_id,
                    });
                }
            }
        }

        Ok(Self {
            profile,
            projects,
            experiences,
        })
    }

    /// The built-in site content, constructed and validated once per process.
    pub fn builtin() -> &'static ContentStore {
        crate::store::seed::builtin()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Projects in authored display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Experiences in authored display order.
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn experience(&self, id: ExperienceId) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }
}
