//! Core domain logic for the folio portfolio site.
//! This crate is the single source of truth for content and navigation
//! invariants; rendering surfaces consume the descriptor trees it emits.

pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod router;
pub mod service;
pub mod store;

pub use filter::filter_projects;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::content::{CaptionedImage, ContentBlock, ImageSize};
pub use model::experience::{Experience, ExperienceId, ProjectLink};
pub use model::profile::{ContactLink, Profile, ResumeDoc};
pub use model::project::{Project, ProjectId};
pub use render::blocks::{render_block, render_blocks, BlockContext};
pub use render::pages::{
    render_experience_detail, render_not_found, render_project_detail, render_shell,
    render_view,
};
pub use render::view::{RenderError, ViewNode};
pub use router::{Tab, UiEvent, View, ViewState};
pub use service::session::SiteSession;
pub use store::content_store::{ContentStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
