//! Content-block rendering.
//!
//! # Responsibility
//! - Map each `ContentBlock` variant to a descriptor node, independent of
//!   which entity (project or about page) owns it.
//!
//! # Invariants
//! - Dispatch is exhaustive over the block sum type.
//! - Every image carries alt text: the caption when present, otherwise a
//!   generated string from the owner title and the block position.
//! - Image-row column count comes from the call site, not the data.

use crate::model::content::{ContentBlock, ImageSize};
use crate::render::view::ViewNode;

/// Rendering context for one block.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    /// Title of the owning entity, used for alt-text fallbacks.
    pub owner_title: &'a str,
    /// Zero-based position of the block within the owner's content.
    pub index: usize,
    /// Column count applied to `ImageRow` blocks.
    pub row_columns: u8,
}

/// Renders one block to a descriptor node.
pub fn render_block(block: &ContentBlock, ctx: &BlockContext<'_>) -> ViewNode {
    match block {
        ContentBlock::Paragraph { text } => ViewNode::text(text),
        ContentBlock::Image { src, caption, size } => ViewNode::Image {
            src: src.clone(),
            alt: caption
                .clone()
                .unwrap_or_else(|| format!("{} image {}", ctx.owner_title, ctx.index)),
            width: ImageSize::resolve(*size),
            caption: caption.clone(),
        },
        ContentBlock::ImageRow { images } => ViewNode::Grid {
            columns: ctx.row_columns,
            children: images
                .iter()
                .enumerate()
                .map(|(n, image)| ViewNode::Image {
                    src: image.src.clone(),
                    // Row cells are numbered 1-based within the row.
                    alt: image
                        .caption
                        .clone()
                        .unwrap_or_else(|| format!("{} image {}", ctx.owner_title, n + 1)),
                    width: ImageSize::Large,
                    caption: image.caption.clone(),
                })
                .collect(),
        },
    }
}

/// Renders an ordered block sequence for one owner.
pub fn render_blocks(
    blocks: &[ContentBlock],
    owner_title: &str,
    row_columns: u8,
) -> Vec<ViewNode> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            render_block(
                block,
                &BlockContext {
                    owner_title,
                    index,
                    row_columns,
                },
            )
        })
        .collect()
}
