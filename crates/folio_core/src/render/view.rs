//! View descriptor tree and rendering errors.
//!
//! # Responsibility
//! - Define the node vocabulary the rendering surface consumes.
//! - Define the resolution errors a detail render can fail with.

use crate::model::content::ImageSize;
use crate::model::experience::ExperienceId;
use crate::model::project::ProjectId;
use crate::router::{Tab, UiEvent};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Detail-view resolution error: an id placed into navigation state has no
/// matching record in the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    ProjectNotFound(ProjectId),
    ExperienceNotFound(ExperienceId),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::ExperienceNotFound(id) => write!(f, "experience not found: {id}"),
        }
    }
}

impl Error for RenderError {}

/// One node of the rendered view tree.
///
/// The vocabulary is deliberately small: structure (`Page`, `Section`,
/// `Grid`), content (`Heading`, `Text`, `Badge`, `BulletList`, `Image`,
/// `Document`), and interaction (`Button`, `Toggle`, `Link`, `TabBar`).
/// Buttons and toggles carry the `UiEvent` the surface should dispatch
/// back when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum ViewNode {
    /// Full-page root; exactly one per render.
    Page {
        title: String,
        children: Vec<ViewNode>,
    },
    /// Visual grouping (card, header, tab body).
    Section { children: Vec<ViewNode> },
    /// Fixed-column grid of equally sized cells.
    Grid { columns: u8, children: Vec<ViewNode> },
    Heading { level: u8, text: String },
    Text { text: String },
    /// Small pill label (category chip, ongoing marker).
    Badge { text: String },
    BulletList { items: Vec<String> },
    Image {
        /// Path resolved by the asset host; passed through unvalidated.
        src: String,
        /// Always present: caption when supplied, generated fallback
        /// otherwise.
        alt: String,
        width: ImageSize,
        caption: Option<String>,
    },
    /// Embedded document preview (resume PDF).
    Document { src: String },
    /// Activatable region; `children` may carry card content.
    Button {
        label: String,
        event: UiEvent,
        children: Vec<ViewNode>,
    },
    /// Two-state chip, used for the category filter.
    Toggle {
        label: String,
        active: bool,
        event: UiEvent,
    },
    Link { label: String, href: String },
    /// Shell tab strip; the surface derives the tab labels from `Tab::ALL`.
    TabBar { active: Tab },
}

impl ViewNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ViewNode::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text { text: text.into() }
    }

    pub fn badge(text: impl Into<String>) -> Self {
        ViewNode::Badge { text: text.into() }
    }

    pub fn section(children: Vec<ViewNode>) -> Self {
        ViewNode::Section { children }
    }

    /// Plain button without card content.
    pub fn button(label: impl Into<String>, event: UiEvent) -> Self {
        ViewNode::Button {
            label: label.into(),
            event,
            children: Vec::new(),
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        ViewNode::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}
