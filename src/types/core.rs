//! Core types used throughout the summarizer.
//!
//! - [`TextItem`] - positioned text pulled out of one text node
//! - [`Role`] - semantic classification of a line
//! - [`ClassifiedLine`] - a text item paired with its role

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text content extracted from a single text-bearing design node.
///
/// `text` is trimmed and never empty. Position defaults to the origin when the
/// node carries no bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: Option<f64>,
    /// Ancestor names from the root down to the immediate parent.
    pub parents: Vec<String>,
}

/// Semantic role of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Heading,
    Subhead,
    Cta,
    Body,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Heading => "HEADING",
            Role::Subhead => "SUBHEAD",
            Role::Cta => "CTA",
            Role::Body => "BODY",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedLine {
    pub item: TextItem,
    pub role: Role,
}
