//! Tagged content blocks composing detail and about views.
//!
//! # Responsibility
//! - Define the block variants a detail view is assembled from.
//! - Keep the wire discriminator compatible with the original content data
//!   (`paragraph`, `image`, `image-row`).
//!
//! # Invariants
//! - The variant set is closed; an unknown tag cannot reach the renderer.
//! - An image without an explicit size renders at `ImageSize::Large`.

use serde::{Deserialize, Serialize};

/// Display width for a standalone image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// Maximum rendered width in pixels for this size class.
    pub fn max_width_px(self) -> u32 {
        match self {
            ImageSize::Small => 200,
            ImageSize::Medium => 300,
            ImageSize::Large => 600,
        }
    }

    /// Resolves an optional authored size; unset falls back to `Large`.
    pub fn resolve(size: Option<ImageSize>) -> ImageSize {
        size.unwrap_or(ImageSize::Large)
    }
}

/// One image-plus-caption cell inside an `ImageRow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionedImage {
    /// Asset path resolved by the external asset host; never validated here.
    pub src: String,
    pub caption: Option<String>,
}

impl CaptionedImage {
    pub fn new(src: impl Into<String>, caption: Option<&str>) -> Self {
        Self {
            src: src.into(),
            caption: caption.map(str::to_string),
        }
    }
}

/// One typed unit of rendered content.
///
/// Serialized with a `type` discriminator matching the original content
/// data, so exported payloads stay readable by the existing front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Flowing text with no further structure.
    Paragraph { text: String },
    /// Single image with optional caption and size class.
    Image {
        src: String,
        caption: Option<String>,
        size: Option<ImageSize>,
    },
    /// Fixed-column row of captioned images; column count is a call-site
    /// decision of the renderer, not part of the data.
    ImageRow { images: Vec<CaptionedImage> },
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn image(src: impl Into<String>, caption: Option<&str>) -> Self {
        ContentBlock::Image {
            src: src.into(),
            caption: caption.map(str::to_string),
            size: None,
        }
    }

    pub fn sized_image(src: impl Into<String>, caption: Option<&str>, size: ImageSize) -> Self {
        ContentBlock::Image {
            src: src.into(),
            caption: caption.map(str::to_string),
            size: Some(size),
        }
    }

    pub fn image_row(images: impl IntoIterator<Item = CaptionedImage>) -> Self {
        ContentBlock::ImageRow {
            images: images.into_iter().collect(),
        }
    }
}
