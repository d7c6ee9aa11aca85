//! Markdown rendering of a [`LandingSummary`].

use std::fmt::Write as FmtWrite;

use serde_json::Value;

use crate::config::RenderConfig;
use crate::pipeline::LandingSummary;
use crate::types::{ClassifiedLine, Role, TextItem};

/// A line that survives normalization and adjacent deduplication.
#[derive(Debug, Clone)]
pub struct PrintedLine<'a> {
    pub role: Role,
    /// Whitespace-normalized text.
    pub text: String,
    pub item: &'a TextItem,
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize each line and drop it when empty or identical to the previously kept
/// line. Only adjacent repeats are removed.
pub fn printable_lines(lines: &[ClassifiedLine]) -> Vec<PrintedLine<'_>> {
    let mut printed: Vec<PrintedLine<'_>> = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;

    for line in lines {
        let text = normalize_text(&line.item.text);
        if text.is_empty() {
            continue;
        }
        if printed.last().is_some_and(|prev| prev.text == text) {
            skipped += 1;
            continue;
        }
        printed.push(PrintedLine {
            role: line.role,
            text,
            item: &line.item,
        });
    }

    log::debug!(
        "Printing {} lines ({} adjacent duplicates skipped)",
        printed.len(),
        skipped
    );
    printed
}

/// Last `depth` ancestor names joined with ` > `, or `None` without ancestors.
pub fn breadcrumb(parents: &[String], depth: usize) -> Option<String> {
    if parents.is_empty() {
        return None;
    }
    let start = parents.len().saturating_sub(depth);
    Some(parents[start..].join(" > "))
}

/// Header value as shown in the report: strings raw, `None` for absent or null.
pub fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn render_markdown(summary: &LandingSummary, config: &RenderConfig) -> String {
    let mut buf = String::new();

    let title = match &summary.name {
        None => "Untitled".to_string(),
        Some(name) => display_field(Some(name)),
    };
    writeln!(buf, "# Landing Page Summary: {title}").ok();
    writeln!(buf).ok();
    writeln!(
        buf,
        "- Figma file name: **{}**",
        display_field(summary.name.as_ref())
    )
    .ok();
    writeln!(
        buf,
        "- Last modified: **{}**",
        display_field(summary.last_modified.as_ref())
    )
    .ok();
    writeln!(buf).ok();
    writeln!(buf, "## Text Content (top -> bottom)").ok();
    writeln!(buf).ok();

    for line in printable_lines(&summary.lines) {
        let mut meta = format!("_{}_", line.role);
        if let Some(crumb) = breadcrumb(&line.item.parents, config.parent_depth) {
            write!(meta, " · `{crumb}`").ok();
        }
        writeln!(buf, "- {meta}: {}", line.text).ok();
    }

    buf
}
