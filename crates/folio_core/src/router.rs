//! View routing state machine.
//!
//! # Responsibility
//! - Track which logical view is visible: the tabbed shell or one detail
//!   view.
//! - Funnel every mutation through named transition functions.
//!
//! # Invariants
//! - A project selection and an experience selection are never both set.
//! - A detail selection takes precedence over the shell; project detail
//!   takes precedence over experience detail.
//! - Leaving a project detail always lands on the Projects tab; leaving an
//!   experience detail preserves the previously active tab.
//! - Tab switches are ignored while a detail view is active.

use crate::model::category::Category;
use crate::model::experience::ExperienceId;
use crate::model::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Top-level shell tab.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    About,
    Experience,
    Projects,
    Resume,
    Blog,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 5] = [
        Tab::About,
        Tab::Experience,
        Tab::Projects,
        Tab::Resume,
        Tab::Blog,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Experience => "Experience",
            Tab::Projects => "Projects",
            Tab::Resume => "Resume",
            Tab::Blog => "Blog",
        }
    }
}

/// The currently visible logical view, derived from `ViewState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Shell(Tab),
    ProjectDetail(ProjectId),
    ExperienceDetail(ExperienceId),
}

/// User action dispatched by the rendering surface.
///
/// Mirrors the router transitions one-to-one; the renderer attaches these
/// to buttons so the surface never needs to know transition rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    SelectTab { tab: Tab },
    SelectProject { project: ProjectId },
    SelectExperience { experience: ExperienceId },
    BackFromProject,
    BackFromExperience,
    ToggleCategory { category: Category },
}

/// Process-local navigation state, mutated only through transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected_project: Option<ProjectId>,
    selected_experience: Option<ExperienceId>,
    selected_categories: BTreeSet<Category>,
    active_tab: Tab,
}

impl ViewState {
    /// All-default state: shell visible, About tab, no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a project detail from any state, clearing any experience
    /// selection to keep detail exclusivity.
    pub fn select_project(&mut self, id: ProjectId) {
        self.selected_experience = None;
        self.selected_project = Some(id);
    }

    /// Opens an experience detail from any state, clearing any project
    /// selection to keep detail exclusivity.
    pub fn select_experience(&mut self, id: ExperienceId) {
        self.selected_project = None;
        self.selected_experience = Some(id);
    }

    /// Leaves a project detail and lands on the Projects tab.
    ///
    /// The destination is fixed, not a history stack: returning from a
    /// project always shows the project list, regardless of the tab that
    /// was active before entering the detail. No-op outside project detail.
    pub fn back_from_project(&mut self) {
        if self.selected_project.take().is_some() {
            self.active_tab = Tab::Projects;
        }
    }

    /// Leaves an experience detail; the previously active tab is preserved.
    /// No-op outside experience detail.
    pub fn back_from_experience(&mut self) {
        self.selected_experience = None;
    }

    /// Switches the shell tab. Ignored while a detail view is active;
    /// detail views must exit through their back transition first.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.selected_project.is_none() && self.selected_experience.is_none() {
            self.active_tab = tab;
        }
    }

    /// Adds `category` to the filter selection, or removes it when already
    /// selected.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.selected_categories.insert(category) {
            self.selected_categories.remove(&category);
        }
    }

    /// Derives the visible view. Project detail wins over experience
    /// detail, which wins over the shell.
    pub fn current_view(&self) -> View {
        if let Some(id) = self.selected_project {
            View::ProjectDetail(id)
        } else if let Some(id) = self.selected_experience {
            View::ExperienceDetail(id)
        } else {
            View::Shell(self.active_tab)
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_project(&self) -> Option<ProjectId> {
        self.selected_project
    }

    pub fn selected_experience(&self) -> Option<ExperienceId> {
        self.selected_experience
    }

    pub fn selected_categories(&self) -> &BTreeSet<Category> {
        &self.selected_categories
    }
}
