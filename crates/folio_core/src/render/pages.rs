//! Page and shell composition.
//!
//! # Responsibility
//! - Compose detail pages, the tabbed shell, and the not-found page from
//!   store records and navigation state.
//!
//! # Invariants
//! - Detail pages resolve their id first and fail with `RenderError`
//!   before any content node is produced.
//! - Image rows render 2 columns in detail views and 3 on the about page.

use crate::filter::filter_projects;
use crate::model::category::Category;
use crate::model::content::ImageSize;
use crate::model::experience::{Experience, ExperienceId};
use crate::model::profile::Profile;
use crate::model::project::{Project, ProjectId};
use crate::render::blocks::render_blocks;
use crate::render::view::{RenderError, ViewNode};
use crate::router::{Tab, UiEvent, View, ViewState};
use crate::store::content_store::ContentStore;

const DETAIL_ROW_COLUMNS: u8 = 2;
const ABOUT_ROW_COLUMNS: u8 = 3;

/// Renders the view derived from `state`.
pub fn render_view(store: &ContentStore, state: &ViewState) -> Result<ViewNode, RenderError> {
    match state.current_view() {
        View::Shell(_) => Ok(render_shell(store, state)),
        View::ProjectDetail(id) => render_project_detail(store, id),
        View::ExperienceDetail(id) => render_experience_detail(store, id),
    }
}

/// Full-page project detail.
pub fn render_project_detail(
    store: &ContentStore,
    id: ProjectId,
) -> Result<ViewNode, RenderError> {
    let project = store
        .project(id)
        .ok_or(RenderError::ProjectNotFound(id))?;

    let mut children = vec![
        ViewNode::button("← Back to Projects", UiEvent::BackFromProject),
        ViewNode::heading(1, &project.title),
    ];
    children.extend(
        project
            .categories
            .iter()
            .map(|category| ViewNode::badge(category.label())),
    );
    if project.ongoing {
        children.push(ViewNode::badge("Ongoing Project"));
    }
    if let Some(href) = &project.repo_link {
        children.push(ViewNode::link("GitHub", href));
    }
    children.extend(render_blocks(
        &project.content,
        &project.title,
        DETAIL_ROW_COLUMNS,
    ));

    Ok(ViewNode::Page {
        title: project.title.clone(),
        children,
    })
}

/// Full-page experience detail.
pub fn render_experience_detail(
    store: &ContentStore,
    id: ExperienceId,
) -> Result<ViewNode, RenderError> {
    let experience = store
        .experience(id)
        .ok_or(RenderError::ExperienceNotFound(id))?;

    Ok(ViewNode::Page {
        title: experience.title.clone(),
        children: vec![
            ViewNode::button("← Back to Experience", UiEvent::BackFromExperience),
            ViewNode::heading(1, &experience.title),
            ViewNode::text(format!(
                "{} • {}",
                experience.organization, experience.period
            )),
            ViewNode::text(&experience.preview),
            ViewNode::heading(3, "Key Achievements"),
            ViewNode::BulletList {
                items: experience.achievements.clone(),
            },
        ],
    })
}

/// Explicit not-found page for an unresolved detail id.
///
/// Carries the matching back transition so the user can always return to
/// the shell.
pub fn render_not_found(error: &RenderError) -> ViewNode {
    let (heading, detail, back_label, back_event) = match error {
        RenderError::ProjectNotFound(id) => (
            "Project not found",
            format!("No project with id {id} exists."),
            "← Back to Projects",
            UiEvent::BackFromProject,
        ),
        RenderError::ExperienceNotFound(id) => (
            "Experience not found",
            format!("No experience with id {id} exists."),
            "← Back to Experience",
            UiEvent::BackFromExperience,
        ),
    };
    ViewNode::Page {
        title: heading.to_string(),
        children: vec![
            ViewNode::heading(1, heading),
            ViewNode::text(detail),
            ViewNode::button(back_label, back_event),
        ],
    }
}

/// The tabbed shell: header, tab bar, and the active tab's content.
pub fn render_shell(store: &ContentStore, state: &ViewState) -> ViewNode {
    let profile = store.profile();
    let body = match state.active_tab() {
        Tab::About => about_tab(profile),
        Tab::Experience => experience_tab(store),
        Tab::Projects => projects_tab(store, state),
        Tab::Resume => resume_tab(profile),
        Tab::Blog => blog_tab(),
    };
    ViewNode::Page {
        title: profile.name.clone(),
        children: vec![
            header(profile),
            ViewNode::TabBar {
                active: state.active_tab(),
            },
            body,
        ],
    }
}

fn header(profile: &Profile) -> ViewNode {
    let mut children = vec![
        ViewNode::heading(1, &profile.name),
        ViewNode::text(&profile.tagline),
    ];
    children.extend(
        profile
            .contacts
            .iter()
            .map(|contact| ViewNode::link(&contact.label, &contact.href)),
    );
    if let Some(photo) = &profile.photo {
        children.push(ViewNode::Image {
            src: photo.clone(),
            alt: "Profile".to_string(),
            width: ImageSize::Small,
            caption: None,
        });
    }
    ViewNode::section(children)
}

fn about_tab(profile: &Profile) -> ViewNode {
    let mut children = vec![ViewNode::heading(2, "About Me")];
    children.extend(render_blocks(&profile.about, &profile.name, ABOUT_ROW_COLUMNS));
    ViewNode::section(children)
}

fn experience_tab(store: &ContentStore) -> ViewNode {
    let mut children = vec![ViewNode::heading(2, "Work Experience")];
    children.extend(store.experiences().iter().map(experience_card));
    ViewNode::section(children)
}

fn experience_card(experience: &Experience) -> ViewNode {
    let mut card = vec![
        ViewNode::heading(3, &experience.title),
        ViewNode::text(format!(
            "{} • {}",
            experience.organization, experience.period
        )),
        ViewNode::text(&experience.preview),
        ViewNode::BulletList {
            items: experience.achievements.clone(),
        },
    ];
    if let Some(logo) = &experience.logo {
        card.push(ViewNode::Image {
            src: logo.clone(),
            alt: format!("{} logo", experience.organization),
            width: ImageSize::Small,
            caption: None,
        });
    }
    card.extend(experience.project_links.iter().map(|link| {
        ViewNode::button(
            format!("→ {}", link.label),
            UiEvent::SelectProject {
                project: link.project_id,
            },
        )
    }));
    ViewNode::Button {
        label: experience.title.clone(),
        event: UiEvent::SelectExperience {
            experience: experience.id,
        },
        children: card,
    }
}

fn projects_tab(store: &ContentStore, state: &ViewState) -> ViewNode {
    let chips = Category::ALL
        .iter()
        .map(|category| ViewNode::Toggle {
            label: category.label().to_string(),
            active: state.selected_categories().contains(category),
            event: UiEvent::ToggleCategory {
                category: *category,
            },
        })
        .collect();

    let cards = filter_projects(store.projects(), state.selected_categories())
        .into_iter()
        .map(project_card)
        .collect();

    ViewNode::section(vec![
        ViewNode::heading(2, "Projects"),
        ViewNode::text("Filter by category:"),
        ViewNode::Section { children: chips },
        ViewNode::Grid {
            columns: 2,
            children: cards,
        },
    ])
}

fn project_card(project: &Project) -> ViewNode {
    let mut card = Vec::new();
    match &project.preview_image {
        Some(src) => card.push(ViewNode::Image {
            src: src.clone(),
            alt: project.title.clone(),
            width: ImageSize::Large,
            caption: None,
        }),
        None => {
            // Cards without a preview image fall back to the glyph of the
            // leading category, when it has one.
            if let Some(glyph) = project
                .categories
                .first()
                .and_then(|category| category.placeholder_glyph())
            {
                card.push(ViewNode::badge(glyph));
            }
        }
    }
    if project.ongoing {
        card.push(ViewNode::badge("Active"));
    }
    card.push(ViewNode::heading(3, &project.title));
    if let Some(href) = &project.repo_link {
        card.push(ViewNode::link("GitHub", href));
    }
    card.push(ViewNode::text(&project.preview));
    card.extend(
        project
            .categories
            .iter()
            .map(|category| ViewNode::badge(category.label())),
    );
    ViewNode::Button {
        label: project.title.clone(),
        event: UiEvent::SelectProject {
            project: project.id,
        },
        children: card,
    }
}

fn resume_tab(profile: &Profile) -> ViewNode {
    let mut children = vec![ViewNode::heading(2, "Resume")];
    if let Some(note) = &profile.resume.note {
        children.push(ViewNode::text(note));
    }
    children.push(ViewNode::link("Download PDF", &profile.resume.path));
    children.push(ViewNode::Document {
        src: profile.resume.path.clone(),
    });
    ViewNode::section(children)
}

fn blog_tab() -> ViewNode {
    ViewNode::section(vec![
        ViewNode::heading(2, "Blog Posts"),
        ViewNode::section(vec![ViewNode::heading(3, "Coming Soon")]),
    ])
}
