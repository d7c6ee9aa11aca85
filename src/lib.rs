//! Figma landing-page summarizer library.
//!
//! Turns a Figma file export into an ordered, classified text outline: headings,
//! subheads, calls-to-action and body copy in top-to-bottom reading order, each
//! annotated with the layers it sits in.
//!
//! # Module Overview
//!
//! - [`figma`] - export parsing and document-tree traversal
//! - [`pipeline`] - reading-order sort and classification
//! - [`classifier`] - font-size and text-shape role heuristics
//! - [`report`] - Markdown rendering with adjacent deduplication
//! - [`output`] - JSON output schema
//! - [`config`] - configuration file support
//! - [`types`] - core data types
//!
//! # Example
//!
//! ```no_run
//! use figsum_lib::{render_markdown, summarize, Config, FigmaExport};
//! use std::path::Path;
//!
//! # fn example() -> figsum_lib::Result<()> {
//! let config = Config::default();
//! let export = FigmaExport::load(Path::new("landing-page.json"))?;
//! let summary = summarize(&export, &config);
//! print!("{}", render_markdown(&summary, &config.render));
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod figma;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod types;

pub use classifier::classify_line;
pub use config::{ClassifierConfig, Config, RenderConfig, WalkerConfig};
pub use error::{ErrorCategory, ErrorPayload, FigsumError, Result};
pub use figma::{collect_text_items, FigmaExport};
pub use output::{LineOutput, SummaryOutput, FIGSUM_OUTPUT_VERSION};
pub use pipeline::{classify_items, sort_reading_order, summarize, LandingSummary};
pub use report::{normalize_text, printable_lines, render_markdown, PrintedLine};
pub use types::{ClassifiedLine, Role, TextItem};
