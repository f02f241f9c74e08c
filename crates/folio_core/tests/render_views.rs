use folio_core::{
    render_block, render_blocks, render_experience_detail, render_project_detail, BlockContext,
    CaptionedImage, Category, ContentBlock, ContentStore, ImageSize, RenderError, SiteSession,
    Tab, UiEvent, View, ViewNode,
};

fn collect<'a>(node: &'a ViewNode, out: &mut Vec<&'a ViewNode>) {
    out.push(node);
    match node {
        ViewNode::Page { children, .. }
        | ViewNode::Section { children }
        | ViewNode::Grid { children, .. }
        | ViewNode::Button { children, .. } => {
            for child in children {
                collect(child, out);
            }
        }
        _ => {}
    }
}

fn flatten(node: &ViewNode) -> Vec<&ViewNode> {
    let mut out = Vec::new();
    collect(node, &mut out);
    out
}

fn texts(node: &ViewNode) -> Vec<String> {
    flatten(node)
        .into_iter()
        .filter_map(|n| match n {
            ViewNode::Text { text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn image_without_caption_gets_generated_alt_text() {
    let block = ContentBlock::image("/projects/demo/shot.png", None);
    let ctx = BlockContext {
        owner_title: "Demo",
        index: 4,
        row_columns: 2,
    };

    match render_block(&block, &ctx) {
        ViewNode::Image { alt, caption, width, .. } => {
            assert_eq!(alt, "Demo image 4");
            assert_eq!(caption, None);
            assert_eq!(width, ImageSize::Large);
        }
        other => panic!("expected image node, got {other:?}"),
    }
}

#[test]
fn captioned_image_uses_the_caption_as_alt_text() {
    let block = ContentBlock::sized_image("/p/a.png", Some("A caption"), ImageSize::Medium);
    let ctx = BlockContext {
        owner_title: "Demo",
        index: 0,
        row_columns: 2,
    };

    match render_block(&block, &ctx) {
        ViewNode::Image { alt, caption, width, .. } => {
            assert_eq!(alt, "A caption");
            assert_eq!(caption.as_deref(), Some("A caption"));
            assert_eq!(width, ImageSize::Medium);
            assert_eq!(width.max_width_px(), 300);
        }
        other => panic!("expected image node, got {other:?}"),
    }
}

#[test]
fn image_row_uses_call_site_columns_and_positional_alt_text() {
    let block = ContentBlock::image_row([
        CaptionedImage::new("/r/one.png", None),
        CaptionedImage::new("/r/two.png", Some("Two")),
    ]);
    let ctx = BlockContext {
        owner_title: "Row Owner",
        index: 3,
        row_columns: 2,
    };

    match render_block(&block, &ctx) {
        ViewNode::Grid { columns, children } => {
            assert_eq!(columns, 2);
            assert_eq!(children.len(), 2);
            match &children[0] {
                ViewNode::Image { alt, .. } => assert_eq!(alt, "Row Owner image 1"),
                other => panic!("expected image node, got {other:?}"),
            }
            match &children[1] {
                ViewNode::Image { alt, .. } => assert_eq!(alt, "Two"),
                other => panic!("expected image node, got {other:?}"),
            }
        }
        other => panic!("expected grid node, got {other:?}"),
    }
}

#[test]
fn detail_blocks_render_in_authored_order() {
    let blocks = [
        ContentBlock::paragraph("first"),
        ContentBlock::image("/a.png", Some("cap")),
        ContentBlock::paragraph("second"),
    ];
    let rendered = render_blocks(&blocks, "Owner", 2);

    assert_eq!(rendered.len(), 3);
    assert!(matches!(rendered[0], ViewNode::Text { .. }));
    assert!(matches!(rendered[1], ViewNode::Image { .. }));
    assert!(matches!(rendered[2], ViewNode::Text { .. }));
}

#[test]
fn project_detail_resolves_and_renders_full_page() {
    let store = ContentStore::builtin();
    let page = render_project_detail(store, 1).expect("project 1 should render");

    match &page {
        ViewNode::Page { title, .. } => assert_eq!(title, "PolicyAI"),
        other => panic!("expected page node, got {other:?}"),
    }

    let nodes = flatten(&page);
    assert!(nodes.iter().any(|n| matches!(
        n,
        ViewNode::Button { event: UiEvent::BackFromProject, .. }
    )));
    // Ongoing project carries its badge.
    assert!(nodes
        .iter()
        .any(|n| matches!(n, ViewNode::Badge { text } if text == "Ongoing Project")));
}

#[test]
fn unknown_project_id_fails_before_any_content_is_produced() {
    let store = ContentStore::builtin();
    let error = render_project_detail(store, 999).expect_err("id 999 must not resolve");
    assert_eq!(error, RenderError::ProjectNotFound(999));

    let error = render_experience_detail(store, 999).expect_err("id 999 must not resolve");
    assert_eq!(error, RenderError::ExperienceNotFound(999));
}

#[test]
fn session_renders_explicit_not_found_page_for_stale_ids() {
    let mut session = SiteSession::builtin();
    session.handle(UiEvent::SelectProject { project: 999 });
    assert_eq!(session.current_view(), View::ProjectDetail(999));

    let page = session.render();
    match &page {
        ViewNode::Page { title, .. } => assert_eq!(title, "Project not found"),
        other => panic!("expected page node, got {other:?}"),
    }
    assert!(texts(&page)
        .iter()
        .any(|t| t.contains("No project with id 999 exists")));
    // The page always offers a way back to the shell.
    assert!(flatten(&page).iter().any(|n| matches!(
        n,
        ViewNode::Button { event: UiEvent::BackFromProject, .. }
    )));

    session.handle(UiEvent::BackFromProject);
    assert_eq!(session.current_view(), View::Shell(Tab::Projects));
}

#[test]
fn about_tab_renders_three_column_photo_row() {
    let session = SiteSession::builtin();
    let page = session.render();

    let grids: Vec<_> = flatten(&page)
        .into_iter()
        .filter_map(|n| match n {
            ViewNode::Grid { columns, children } => Some((*columns, children.len())),
            _ => None,
        })
        .collect();
    assert!(grids.contains(&(3, 3)), "expected the 3-photo travel row");
}

#[test]
fn projects_tab_filters_cards_through_toggled_categories() {
    let mut session = SiteSession::builtin();
    session.handle(UiEvent::SelectTab { tab: Tab::Projects });

    let all_cards = project_card_count(&session.render());
    assert_eq!(all_cards, ContentStore::builtin().projects().len());

    session.handle(UiEvent::ToggleCategory {
        category: Category::MachineLearning,
    });
    let ml_cards = project_card_count(&session.render());
    assert!(ml_cards < all_cards);
    assert!(ml_cards >= 1);

    // The chip for the toggled category reads as active.
    let active_chips: Vec<String> = flatten(&session.render())
        .into_iter()
        .filter_map(|n| match n {
            ViewNode::Toggle { label, active: true, .. } => Some(label.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(active_chips, vec!["Machine Learning".to_string()]);
}

fn project_card_count(page: &ViewNode) -> usize {
    flatten(page)
        .into_iter()
        .filter(|n| matches!(n, ViewNode::Button { event: UiEvent::SelectProject { .. }, .. }))
        .count()
}

#[test]
fn experience_tab_cards_link_into_related_projects() {
    let mut session = SiteSession::builtin();
    session.handle(UiEvent::SelectTab {
        tab: Tab::Experience,
    });
    let page = session.render();

    let link_targets: Vec<u32> = flatten(&page)
        .into_iter()
        .filter_map(|n| match n {
            ViewNode::Button {
                label,
                event: UiEvent::SelectProject { project },
                ..
            } if label.starts_with('→') => Some(*project),
            _ => None,
        })
        .collect();
    assert_eq!(link_targets, vec![9]);

    // Following the link swaps the shell for the project detail.
    session.handle(UiEvent::SelectProject { project: 9 });
    assert_eq!(session.current_view(), View::ProjectDetail(9));
    session.handle(UiEvent::BackFromProject);
    assert_eq!(session.current_view(), View::Shell(Tab::Projects));
}

#[test]
fn resume_tab_embeds_the_document_and_staleness_note() {
    let mut session = SiteSession::builtin();
    session.handle(UiEvent::SelectTab { tab: Tab::Resume });
    let page = session.render();

    assert!(flatten(&page).iter().any(|n| matches!(
        n,
        ViewNode::Document { src } if src.ends_with(".pdf")
    )));
    assert!(texts(&page).iter().any(|t| t == "Not up to date"));
}

#[test]
fn blog_tab_shows_the_placeholder_card() {
    let mut session = SiteSession::builtin();
    session.handle(UiEvent::SelectTab { tab: Tab::Blog });
    let page = session.render();

    let headings: Vec<String> = flatten(&page)
        .into_iter()
        .filter_map(|n| match n {
            ViewNode::Heading { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert!(headings.contains(&"Blog Posts".to_string()));
    assert!(headings.contains(&"Coming Soon".to_string()));
}
