//! Site-owner profile record.
//!
//! # Responsibility
//! - Define the header identity, contact links, about-page body, and the
//!   downloadable resume reference.

use crate::model::content::ContentBlock;
use serde::{Deserialize, Serialize};

/// One labelled contact destination shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

impl ContactLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Downloadable resume document reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDoc {
    /// Asset path of the PDF; resolved by the external asset host.
    pub path: String,
    /// Optional staleness note shown next to the heading.
    pub note: Option<String>,
}

/// Site-owner identity and about-page content, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    /// Optional header portrait path.
    pub photo: Option<String>,
    pub contacts: Vec<ContactLink>,
    pub resume: ResumeDoc,
    /// Ordered about-page body.
    pub about: Vec<ContentBlock>,
}
