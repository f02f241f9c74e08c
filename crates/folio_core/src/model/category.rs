//! Project category tags.
//!
//! # Responsibility
//! - Define the closed set of tags projects can carry.
//! - Provide display labels and the card placeholder glyphs keyed on a
//!   project's leading category.
//!
//! # Invariants
//! - The set is closed; filtering never has to handle unknown tag strings.
//! - `ALL` lists every member in the order the filter chips are shown.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Tag used to group and filter projects. Many-to-many with projects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Research,
    #[serde(rename = "Full Stack")]
    FullStack,
    #[serde(rename = "Mixed Reality")]
    MixedReality,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "LLMs")]
    Llms,
    Medical,
}

impl Category {
    /// Every category, in filter-chip display order.
    pub const ALL: [Category; 7] = [
        Category::Research,
        Category::FullStack,
        Category::MixedReality,
        Category::ComputerVision,
        Category::MachineLearning,
        Category::Llms,
        Category::Medical,
    ];

    /// Human-readable label, also used as the serde wire string.
    pub fn label(self) -> &'static str {
        match self {
            Category::Research => "Research",
            Category::FullStack => "Full Stack",
            Category::MixedReality => "Mixed Reality",
            Category::ComputerVision => "Computer Vision",
            Category::MachineLearning => "Machine Learning",
            Category::Llms => "LLMs",
            Category::Medical => "Medical",
        }
    }

    /// Glyph shown on a project card when it has no preview image.
    ///
    /// Keyed on the project's first category; categories without a glyph
    /// leave the card image area empty.
    pub fn placeholder_glyph(self) -> Option<&'static str> {
        match self {
            Category::MachineLearning => Some("🤖"),
            Category::MixedReality => Some("🥽"),
            Category::Llms => Some("💬"),
            _ => None,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
