//! CLI smoke probe for `folio_core`.
//!
//! # Responsibility
//! - Drive a short scripted navigation over the built-in site and print
//!   each rendered descriptor tree as indented text.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::{Category, SiteSession, Tab, UiEvent, ViewNode};

fn main() {
    // File logging is optional for the probe; a failure only disables it.
    let log_dir = std::env::temp_dir().join("folio-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = folio_core::init_logging(folio_core::default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("folio_core version={}", folio_core::core_version());

    let mut session = SiteSession::builtin();
    println!("--- initial view");
    print_tree(&session.render(), 0);

    let script = [
        UiEvent::SelectTab { tab: Tab::Projects },
        UiEvent::ToggleCategory {
            category: Category::MachineLearning,
        },
        UiEvent::SelectProject { project: 9 },
        UiEvent::BackFromProject,
    ];
    for event in script {
        println!("--- after {event:?}");
        session.handle(event);
        print_tree(&session.render(), 0);
    }
}

fn print_tree(node: &ViewNode, depth: usize) {
    let pad = "  ".repeat(depth);
    match node {
        ViewNode::Page { title, children } => {
            println!("{pad}page: {title}");
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        ViewNode::Section { children } => {
            println!("{pad}section");
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        ViewNode::Grid { columns, children } => {
            println!("{pad}grid[{columns}]");
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        ViewNode::Heading { level, text } => println!("{pad}h{level}: {text}"),
        ViewNode::Text { text } => println!("{pad}text: {text}"),
        ViewNode::Badge { text } => println!("{pad}badge: {text}"),
        ViewNode::BulletList { items } => {
            for item in items {
                println!("{pad}- {item}");
            }
        }
        ViewNode::Image { src, alt, width, .. } => {
            println!("{pad}image: {src} (alt: {alt}, max {}px)", width.max_width_px());
        }
        ViewNode::Document { src } => println!("{pad}document: {src}"),
        ViewNode::Button {
            label, children, ..
        } => {
            println!("{pad}button: {label}");
            for child in children {
                print_tree(child, depth + 1);
            }
        }
        ViewNode::Toggle { label, active, .. } => {
            let marker = if *active { "x" } else { " " };
            println!("{pad}toggle[{marker}]: {label}");
        }
        ViewNode::Link { label, href } => println!("{pad}link: {label} -> {href}"),
        ViewNode::TabBar { active } => println!("{pad}tabs (active: {})", active.label()),
    }
}
