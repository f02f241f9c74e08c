//! Site session facade.
//!
//! # Responsibility
//! - Own the navigation state for one UI session over an immutable store.
//! - Route dispatched events to router transitions and render the current
//!   view, substituting the not-found page when a detail id fails to
//!   resolve.
//!
//! # Invariants
//! - Event handling is synchronous; each event completes before the next
//!   one is processed.
//! - `render` never returns partial detail content.

use crate::render::pages::{render_not_found, render_view};
use crate::render::view::ViewNode;
use crate::router::{UiEvent, View, ViewState};
use crate::store::content_store::ContentStore;
use log::{debug, warn};

/// One UI session: immutable content plus mutable navigation state.
pub struct SiteSession<'store> {
    store: &'store ContentStore,
    state: ViewState,
}

impl<'store> SiteSession<'store> {
    /// Creates a session over `store` with all-default navigation state.
    pub fn new(store: &'store ContentStore) -> Self {
        Self {
            store,
            state: ViewState::new(),
        }
    }

    /// Routes one user action to its router transition.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::SelectTab { tab } => self.state.select_tab(tab),
            UiEvent::SelectProject { project } => self.state.select_project(project),
            UiEvent::SelectExperience { experience } => {
                self.state.select_experience(experience)
            }
            UiEvent::BackFromProject => self.state.back_from_project(),
            UiEvent::BackFromExperience => self.state.back_from_experience(),
            UiEvent::ToggleCategory { category } => self.state.toggle_category(category),
        }
        debug!(
            "event=navigate module=session status=ok view={:?}",
            self.state.current_view()
        );
    }

    /// Renders the current view.
    ///
    /// A stale detail id renders the explicit not-found page instead of
    /// failing the session.
    pub fn render(&self) -> ViewNode {
        match render_view(self.store, &self.state) {
            Ok(node) => node,
            Err(error) => {
                warn!("event=render_not_found module=session status=error detail={error}");
                render_not_found(&error)
            }
        }
    }

    pub fn current_view(&self) -> View {
        self.state.current_view()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &ContentStore {
        self.store
    }
}

impl SiteSession<'static> {
    /// Session over the built-in site content.
    pub fn builtin() -> Self {
        Self::new(ContentStore::builtin())
    }
}
