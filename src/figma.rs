//! Figma export parsing and document-tree traversal.
//!
//! - [`FigmaExport`] - top-level file export (header fields + root document)
//! - [`collect_text_items`] - recursive text-node collection with ancestor names

pub mod api_types;
pub mod walker;


pub use api_types::FigmaExport;
pub use walker::collect_text_items;
